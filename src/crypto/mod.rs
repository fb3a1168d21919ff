//! Cryptographic primitives (§4.1): key derivation, padding, the monotonic
//! nonce counter, and the AEAD cipher that ties them together.

mod cipher;
mod kdf;
mod nonce;
mod padding;

pub use cipher::Cipher;
pub use kdf::{derive_password_key, KEY_LEN, MIN_SALT_LEN};
pub use nonce::{NonceCounter, NONCE_LEN};
pub use padding::{depad, pad};
