//! Table definitions and the version gate. Grounded in
//! `examples/original_source/store/store.go`'s `create` statement, extended
//! with the two-tier key columns (§4.2: `key_nonce`/`encrypted_key` for the
//! wrapped DEK, `data_nonce` for the DEK's own counter) that the original's
//! single-cipher design didn't need.

pub const CURRENT_VERSION: i64 = 1;

pub const CREATE_SETTINGS: &str = "
CREATE TABLE settings (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL,
    password_salt BLOB NOT NULL,
    password_stretch INTEGER NOT NULL,
    key_nonce BLOB NOT NULL,
    encrypted_key BLOB NOT NULL,
    data_nonce BLOB NOT NULL
)";

pub const CREATE_CREDENTIALS: &str = "
CREATE TABLE credentials (
    id INTEGER PRIMARY KEY,
    login BLOB NOT NULL,
    password BLOB NOT NULL,
    realm BLOB NOT NULL,
    note BLOB NOT NULL
)";
