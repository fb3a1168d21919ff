//! Two-tier key hierarchy (§4.2): a master-password-derived KEK wraps a
//! random DEK; the DEK is what actually encrypts credential fields.
//! Rotating the master password only re-wraps the DEK, so it never touches
//! credential rows. Grounded in the teacher's `keychain.rs` dual-slot wrap
//! pattern (`MasterKey`, `init_keychain`, `change_password`), generalized
//! from two slots (password + recovery code) down to one (this spec defines
//! no recovery mechanism) and adapted from Argon2id to the PBKDF2-HMAC-SHA3-512
//! derivation specified in §4.1.

use rand::RngCore;
use zeroize::Zeroizing;

use crate::crypto::{Cipher, KEY_LEN, NONCE_LEN};
use crate::error::Result;

/// The data-encryption key: a random 16-byte AES-128 key, held only in
/// memory, zeroized on drop.
pub struct Dek(Zeroizing<[u8; KEY_LEN]>);

impl Dek {
    fn random() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self(Zeroizing::new(bytes))
    }

    pub fn bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

/// Everything persisted in the `settings` row needed to reconstruct the
/// key hierarchy: the KEK's salt/stretch/nonce, the wrapped DEK blob, and
/// the DEK's own nonce counter (credential fields are sealed under the DEK,
/// so the DEK cipher's counter advances independently of the KEK's).
pub struct KeyMaterial {
    pub password_salt: Vec<u8>,
    pub password_stretch: u32,
    pub key_nonce: [u8; NONCE_LEN],
    pub encrypted_key: Vec<u8>,
    pub data_nonce: [u8; NONCE_LEN],
}

/// The unlocked key hierarchy: a KEK cipher (for rewrapping on rotation),
/// the unwrapped DEK bytes (kept only to support rewrapping), and a DEK
/// cipher (for sealing/opening credential fields).
pub struct KeyHierarchy {
    kek: Cipher,
    dek: Dek,
    dek_cipher: Cipher,
}

impl KeyHierarchy {
    /// Generate a fresh DEK, wrap it under a freshly-derived KEK.
    pub fn create(password: &str, stretch: u32) -> Result<(Self, KeyMaterial)> {
        let mut kek = Cipher::new(password, stretch)?;
        let dek = Dek::random();
        let encrypted_key = kek.encrypt(dek.bytes());

        let material = KeyMaterial {
            password_salt: kek.salt().to_vec(),
            password_stretch: stretch,
            key_nonce: kek.current_nonce(),
            encrypted_key,
            data_nonce: [0u8; NONCE_LEN],
        };

        let dek_cipher = Cipher::from_key(dek.bytes(), kek.salt(), &material.data_nonce)?;
        Ok((
            Self {
                kek,
                dek,
                dek_cipher,
            },
            material,
        ))
    }

    /// Unlock an existing hierarchy: derive the KEK, unwrap the DEK. The
    /// DEK-unwrap's GCM tag is the only password-correctness check there
    /// is (§9.3) — a wrong password surfaces as `Error::IncorrectPassword`
    /// from `try_decrypt`, not a distinct sentinel mismatch.
    pub fn unlock(password: &str, material: &KeyMaterial) -> Result<Self> {
        let kek = Cipher::load(
            password,
            &material.password_salt,
            material.password_stretch,
            &material.key_nonce,
        )?;
        let dek_bytes = kek.try_decrypt(&material.encrypted_key)?;
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&dek_bytes);
        let dek_cipher = Cipher::from_key(&key, &material.password_salt, &material.data_nonce)?;
        Ok(Self {
            kek,
            dek: Dek(Zeroizing::new(key)),
            dek_cipher,
        })
    }

    /// Re-wrap the same DEK under a new master password. Only the KEK-side
    /// fields of `KeyMaterial` change; the DEK itself, its nonce counter,
    /// and every credential row are untouched — this is the O(1) rotation
    /// the two-tier design exists for.
    pub fn rotate(&mut self, new_password: &str, stretch: u32) -> Result<KeyMaterial> {
        let mut new_kek = Cipher::new(new_password, stretch)?;
        let encrypted_key = new_kek.encrypt(self.dek.bytes());
        let material = KeyMaterial {
            password_salt: new_kek.salt().to_vec(),
            password_stretch: stretch,
            key_nonce: new_kek.current_nonce(),
            encrypted_key,
            data_nonce: self.dek_cipher.current_nonce(),
        };
        self.kek = new_kek;
        Ok(material)
    }

    pub fn encrypt_field(&mut self, plaintext: &[u8]) -> Vec<u8> {
        self.dek_cipher.encrypt(plaintext)
    }

    pub fn decrypt_field(&self, blob: &[u8]) -> Result<Vec<u8>> {
        self.dek_cipher.try_decrypt(blob)
    }

    pub fn data_nonce(&self) -> [u8; NONCE_LEN] {
        self.dek_cipher.current_nonce()
    }
}
