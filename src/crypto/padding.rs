//! PKCS#7 padding to the AES block size, applied before sealing so that
//! plaintext length never leaks credential length exactly. Grounded in
//! `examples/original_source/crypto/crypto.go`'s `pad`/`depad`.

use crate::error::{Error, Result};

pub const BLOCK_SIZE: usize = 16;

/// Pad `data` to a multiple of `BLOCK_SIZE`. Always appends at least one
/// byte of padding, even if `data` is already block-aligned, so that depad
/// is unambiguous.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - (data.len() % BLOCK_SIZE);
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    out
}

/// Remove PKCS#7 padding, validating that the trailing byte's value matches
/// the actual run of identical trailing bytes. A mismatch means the
/// plaintext is corrupt (or, since GCM already authenticated it, that this
/// padding scheme was never applied) rather than something to repair.
pub fn depad(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(Error::InvalidSettings("empty plaintext".into()));
    }
    let pad_len = *data.last().unwrap() as usize;
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > data.len() {
        return Err(Error::InvalidSettings("bad padding length".into()));
    }
    let start = data.len() - pad_len;
    if data[start..].iter().any(|&b| b as usize != pad_len) {
        return Err(Error::InvalidSettings("bad padding bytes".into()));
    }
    Ok(data[..start].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_always_adds_at_least_one_byte() {
        let data = vec![1u8; BLOCK_SIZE];
        let padded = pad(&data);
        assert_eq!(padded.len(), BLOCK_SIZE * 2);
    }

    #[test]
    fn pad_depad_round_trips() {
        for len in 0..40 {
            let data: Vec<u8> = (0..len as u8).collect();
            let padded = pad(&data);
            assert_eq!(padded.len() % BLOCK_SIZE, 0);
            let unpadded = depad(&padded).unwrap();
            assert_eq!(unpadded, data);
        }
    }

    #[test]
    fn depad_rejects_corrupt_padding() {
        let mut padded = pad(b"hello");
        let last = padded.len() - 1;
        padded[last] = 0;
        assert!(depad(&padded).is_err());
    }

    #[test]
    fn depad_rejects_inconsistent_padding_bytes() {
        let mut padded = pad(b"hello world12345");
        let last = padded.len() - 1;
        padded[last - 1] ^= 0xFF;
        assert!(depad(&padded).is_err());
    }
}
