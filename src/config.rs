//! Default database path resolution (§6): `$WARDFILE` if set, else
//! `<home>/.ward`. Grounded in `examples/original_source/ward/common.go`'s
//! path default and the teacher's `resolve_keychain_path` (`keychain.rs`),
//! using `dirs::home_dir()` in place of Tauri's `app_data_dir()` since
//! this is a plain CLI with no app-handle context.

use std::path::PathBuf;

use crate::error::{Error, Result};

pub const WARDFILE_ENV: &str = "WARDFILE";
const DEFAULT_FILENAME: &str = ".ward";

pub fn default_database_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(WARDFILE_ENV) {
        return Ok(PathBuf::from(path));
    }
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_FILENAME))
        .ok_or_else(|| Error::InvalidSettings("could not determine home directory".into()))
}
