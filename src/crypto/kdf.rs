//! Password-based key derivation: PBKDF2-HMAC-SHA3-512 producing a 16-byte
//! key bound to AES-128-GCM (§4.1). Grounded in
//! `examples/original_source/crypto/crypto.go`'s `LoadCipher`, which derives
//! via `pbkdf2.Key(password, salt, stretch, keyLen, sha3.New512)`; the
//! spec's key length is 16 bytes (AES-128) rather than the original's 32.

use pbkdf2::pbkdf2_hmac;
use sha3::Sha3_512;

use crate::error::{Error, Result};

pub const KEY_LEN: usize = 16;
pub const MIN_SALT_LEN: usize = 64;

/// Derive a 16-byte AES-128 key from a master password, salt, and iteration
/// count. Rejects an empty password, a salt shorter than 64 bytes, or a
/// non-positive stretch — these are caller bugs, not recoverable input.
pub fn derive_password_key(password: &str, salt: &[u8], stretch: u32) -> Result<[u8; KEY_LEN]> {
    if password.is_empty() {
        return Err(Error::InvalidPassword);
    }
    if salt.len() < MIN_SALT_LEN {
        return Err(Error::InvalidSalt);
    }
    if stretch < 1 {
        return Err(Error::InvalidStretch);
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha3_512>(password.as_bytes(), salt, stretch, &mut key);
    Ok(key)
}
