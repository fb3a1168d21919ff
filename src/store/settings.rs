//! Reading and writing the singleton `settings` row (§3), and converting it
//! to/from the in-memory `KeyMaterial` the key hierarchy needs.

use rusqlite::{params, Connection};

use crate::crypto::{MIN_SALT_LEN, NONCE_LEN};
use crate::error::{Error, Result};
use crate::keys::KeyMaterial;

use super::schema::CURRENT_VERSION;

/// Render a persisted nonce column into the fixed-width buffer the cipher
/// layer expects, failing the whole row read (`Error::InvalidSettings`,
/// not `Error::InvalidNonce`) rather than letting a too-short blob reach
/// the cipher and surface as a misleadingly-recoverable `IncorrectPassword`.
fn fixed_nonce(field: &str, bytes: Vec<u8>) -> Result<[u8; NONCE_LEN]> {
    if bytes.len() < NONCE_LEN {
        return Err(Error::InvalidSettings(format!(
            "{field} must be at least {NONCE_LEN} bytes, got {}",
            bytes.len()
        )));
    }
    let mut out = [0u8; NONCE_LEN];
    out.copy_from_slice(&bytes[bytes.len() - NONCE_LEN..]);
    Ok(out)
}

pub fn insert(conn: &Connection, material: &KeyMaterial) -> Result<()> {
    conn.execute(
        "INSERT INTO settings (id, version, password_salt, password_stretch, key_nonce, encrypted_key, data_nonce)
         VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            CURRENT_VERSION,
            material.password_salt,
            material.password_stretch,
            material.key_nonce.to_vec(),
            material.encrypted_key,
            material.data_nonce.to_vec(),
        ],
    )?;
    Ok(())
}

/// Read the settings row and validate every §3 invariant before handing
/// key material to the key hierarchy. A row that fails one of these checks
/// is corrupt, not merely "wrong password" — it must surface as the fatal
/// `Error::InvalidSettings` so `open_store`'s retry loop (which only
/// re-prompts on `IncorrectPassword`/`InvalidPassword`) does not spin
/// forever trying passwords against a database that can never open.
pub fn load(conn: &Connection) -> Result<KeyMaterial> {
    let (version, password_salt, password_stretch, key_nonce, encrypted_key, data_nonce) = conn
        .query_row(
            "SELECT version, password_salt, password_stretch, key_nonce, encrypted_key, data_nonce
             FROM settings WHERE id = 1",
            [],
            |row| {
                let version: i64 = row.get(0)?;
                let password_salt: Vec<u8> = row.get(1)?;
                let password_stretch: i64 = row.get(2)?;
                let key_nonce: Vec<u8> = row.get(3)?;
                let encrypted_key: Vec<u8> = row.get(4)?;
                let data_nonce: Vec<u8> = row.get(5)?;
                Ok((version, password_salt, password_stretch, key_nonce, encrypted_key, data_nonce))
            },
        )?;

    if version > CURRENT_VERSION {
        return Err(Error::BadVersion(version));
    }
    if password_salt.len() < MIN_SALT_LEN {
        return Err(Error::InvalidSettings(format!(
            "password_salt must be at least {MIN_SALT_LEN} bytes, got {}",
            password_salt.len()
        )));
    }
    if password_stretch < 1 {
        return Err(Error::InvalidSettings(format!(
            "password_stretch must be a positive iteration count, got {password_stretch}"
        )));
    }
    if encrypted_key.is_empty() {
        return Err(Error::InvalidSettings("encrypted_key must not be empty".into()));
    }

    Ok(KeyMaterial {
        password_salt,
        password_stretch: password_stretch as u32,
        key_nonce: fixed_nonce("key_nonce", key_nonce)?,
        encrypted_key,
        data_nonce: fixed_nonce("data_nonce", data_nonce)?,
    })
}

/// Write back the KEK-side columns after a master-password rotation, and
/// the DEK's nonce counter after any mutation commit (§9.1: once per
/// transaction, never once per individual field seal).
pub fn update_key_material(conn: &Connection, material: &KeyMaterial) -> Result<()> {
    conn.execute(
        "UPDATE settings SET password_salt = ?1, password_stretch = ?2, key_nonce = ?3,
         encrypted_key = ?4, data_nonce = ?5 WHERE id = 1",
        params![
            material.password_salt,
            material.password_stretch,
            material.key_nonce.to_vec(),
            material.encrypted_key,
            material.data_nonce.to_vec(),
        ],
    )?;
    Ok(())
}

pub fn update_data_nonce(conn: &Connection, data_nonce: [u8; NONCE_LEN]) -> Result<()> {
    conn.execute(
        "UPDATE settings SET data_nonce = ?1 WHERE id = 1",
        params![data_nonce.to_vec()],
    )?;
    Ok(())
}
