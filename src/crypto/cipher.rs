//! AES-128-GCM cipher bound to a derived key, with the monotonic nonce
//! counter and PKCS#7 padding wired in. Grounded in
//! `examples/original_source/crypto/crypto.go`'s `Cipher`/`NewCipher`/
//! `LoadCipher`/`Encrypt`/`TryDecrypt`, translated to the teacher's AEAD
//! idiom (`src/crypto.rs`, `src/keychain.rs`: `aead::{Aead, KeyInit}`).
//!
//! Wire shape per sealed field: `sealed || nonce` (§4.1), nonce always
//! `NONCE_LEN` bytes even though GCM nonces are conventionally random —
//! here the nonce is the rendered counter, never reused, so determinism is
//! the point, not a weakness.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes128Gcm, Nonce,
};
use rand::RngCore;

use super::kdf::{derive_password_key, KEY_LEN};
use super::nonce::{NonceCounter, NONCE_LEN};
use super::padding::{depad, pad};
use crate::error::{Error, Result};

pub struct Cipher {
    aead: Aes128Gcm,
    nonce: NonceCounter,
    salt: Vec<u8>,
}

impl Cipher {
    /// Create a brand-new cipher: fresh random salt, counter starting at
    /// zero, key derived from `password`.
    pub fn new(password: &str, stretch: u32) -> Result<Self> {
        let mut salt = vec![0u8; super::kdf::MIN_SALT_LEN];
        rand::rngs::OsRng.fill_bytes(&mut salt);
        Self::load(password, &salt, stretch, &[0u8; NONCE_LEN])
    }

    /// Rebuild a cipher from persisted `salt`/`stretch`/`nonce` state and a
    /// candidate password. Key derivation always succeeds; whether the
    /// password was *correct* is only knowable once something is decrypted
    /// with it (§9.3: no sentinel, the AEAD tag is the only check).
    pub fn load(password: &str, salt: &[u8], stretch: u32, nonce: &[u8]) -> Result<Self> {
        let key = derive_password_key(password, salt, stretch)?;
        let aead = Aes128Gcm::new(aes_gcm::Key::<Aes128Gcm>::from_slice(&key));
        Ok(Self {
            aead,
            nonce: NonceCounter::load(nonce)?,
            salt: salt.to_vec(),
        })
    }

    /// Build directly from an already-derived key (used when unwrapping a
    /// DEK rather than deriving straight from a password).
    pub fn from_key(key: &[u8; KEY_LEN], salt: &[u8], nonce: &[u8]) -> Result<Self> {
        let aead = Aes128Gcm::new(aes_gcm::Key::<Aes128Gcm>::from_slice(key));
        Ok(Self {
            aead,
            nonce: NonceCounter::load(nonce)?,
            salt: salt.to_vec(),
        })
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// The counter's current rendering, for persisting alongside a mutation
    /// commit (§9.1: write back once per transaction, not once per seal).
    pub fn current_nonce(&self) -> [u8; NONCE_LEN] {
        self.nonce.current()
    }

    /// Pad, seal, and append the nonce used, then advance the counter.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Vec<u8> {
        let nonce_bytes = self.nonce.current();
        let padded = pad(plaintext);
        let sealed = self
            .aead
            .encrypt(Nonce::from_slice(&nonce_bytes), padded.as_ref())
            .expect("AES-128-GCM encryption of a bounded plaintext cannot fail");
        self.nonce.advance();
        let mut out = sealed;
        out.extend_from_slice(&nonce_bytes);
        out
    }

    /// Split `sealed || nonce`, open, and depad. Any failure — truncated
    /// input, wrong key, corrupted ciphertext, bad padding — collapses to
    /// `Error::IncorrectPassword`, matching the original's
    /// `IncorrectPasswordError` on any `TryDecrypt` failure.
    pub fn try_decrypt(&self, blob: &[u8]) -> Result<Vec<u8>> {
        if blob.len() < NONCE_LEN {
            return Err(Error::IncorrectPassword);
        }
        let split = blob.len() - NONCE_LEN;
        let (sealed, nonce_bytes) = blob.split_at(split);
        let opened = self
            .aead
            .decrypt(Nonce::from_slice(nonce_bytes), sealed)
            .map_err(|_| Error::IncorrectPassword)?;
        depad(&opened).map_err(|_| Error::IncorrectPassword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_then_decrypt_round_trips() {
        let mut cipher = Cipher::new("correct horse battery staple", 1000).unwrap();
        let ct = cipher.encrypt(b"login@example.com");
        let pt = cipher.try_decrypt(&ct).unwrap();
        assert_eq!(pt, b"login@example.com");
    }

    #[test]
    fn each_encryption_uses_a_fresh_nonce() {
        let mut cipher = Cipher::new("pw", 1000).unwrap();
        let a = cipher.encrypt(b"same plaintext");
        let b = cipher.encrypt(b"same plaintext");
        assert_ne!(a, b);
    }

    #[test]
    fn wrong_password_fails_to_decrypt() {
        let mut writer = Cipher::new("right-password", 1000).unwrap();
        let ct = writer.encrypt(b"secret");
        let reader = Cipher::load("wrong-password", writer.salt(), 1000, &[0u8; NONCE_LEN])
            .unwrap();
        assert!(matches!(
            reader.try_decrypt(&ct),
            Err(Error::IncorrectPassword)
        ));
    }

    #[test]
    fn truncated_ciphertext_is_incorrect_password() {
        let mut cipher = Cipher::new("pw", 1000).unwrap();
        let ct = cipher.encrypt(b"secret");
        assert!(matches!(
            cipher.try_decrypt(&ct[..NONCE_LEN - 1]),
            Err(Error::IncorrectPassword)
        ));
    }

    #[test]
    fn nonce_survives_persist_and_reload() {
        let mut cipher = Cipher::new("pw", 1000).unwrap();
        let _ = cipher.encrypt(b"one");
        let _ = cipher.encrypt(b"two");
        let persisted_nonce = cipher.current_nonce();
        let salt = cipher.salt().to_vec();
        let reloaded = Cipher::load("pw", &salt, 1000, &persisted_nonce).unwrap();
        assert_eq!(reloaded.current_nonce(), persisted_nonce);
    }
}
