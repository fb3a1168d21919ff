//! Error taxonomy shared by the crypto, key hierarchy, and store layers.
//!
//! Mirrors `openintent-store`'s `StoreError`: named variants for domain
//! errors, `#[from]` conversions for the two underlying libraries we call
//! into directly. The CLI layer wraps this in `anyhow` at the command
//! boundary; nothing in this crate ever prints.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The KEK could not authenticate the sealed DEK. Never distinguishes
    /// "wrong password" from "truncated ciphertext" from "tag mismatch" —
    /// all three collapse to this variant.
    #[error("incorrect master password")]
    IncorrectPassword,

    /// An empty master password was supplied.
    #[error("master password must not be empty")]
    InvalidPassword,

    /// `password_salt` shorter than 64 bytes.
    #[error("salt must be at least 64 bytes")]
    InvalidSalt,

    /// `password_stretch` less than 1.
    #[error("stretch must be a positive iteration count")]
    InvalidStretch,

    /// A nonce buffer shorter than the AEAD's 12-byte nonce width.
    #[error("nonce must be at least 12 bytes")]
    InvalidNonce,

    /// The settings row failed one of its invariants (§3).
    #[error("invalid settings row: {0}")]
    InvalidSettings(String),

    /// `settings.version` is newer than this build understands.
    #[error("unsupported settings version {0}")]
    BadVersion(i64),

    /// `create` was called against a path that already has a database.
    #[error("database already exists at {0}")]
    AlreadyExists(std::path::PathBuf),

    /// `open` was called against a path with no database.
    #[error("no database found at {0}")]
    NotFound(std::path::PathBuf),

    /// `update`/`delete` referenced an id that isn't in the table.
    #[error("no credential with id {0}")]
    InvalidId(i64),

    /// Underlying SQLite failure.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// JSON (de)serialization failure, e.g. during import/export.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O failure opening/reading/writing a file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Generator was given no alphabets to draw characters from.
    #[error("at least one character class must be enabled")]
    NoAlphabets,

    /// Generator was given no usable length (empty or inverted bounds).
    #[error("length bounds are empty")]
    NoLength,

    /// No length in `[min_length, max_length]` admits an assignment that
    /// satisfies every alphabet's `[min, max]` occurrence bounds.
    #[error("no password satisfies the requested constraints")]
    Unsatisfiable,
}
