//! Credential store (§4.3): SQLite via `rusqlite`, a two-tier key hierarchy
//! unlocked on open, every mutation committed inside one transaction that
//! also writes back the DEK nonce counter. Grounded in
//! `examples/original_source/store/store.go` (`Open`/`Create`/`update`/
//! `eachCredential`/`FindCredentials`), generalized per the distilled
//! spec's authoritative multi-pattern `find` and two-tier key columns.

mod db;
mod schema;
mod settings;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

use crate::error::{Error, Result};
use crate::keys::KeyHierarchy;
use crate::types::Credential;

pub struct Store {
    conn: Connection,
    keys: KeyHierarchy,
    path: PathBuf,
}

impl Store {
    /// Create a brand-new, empty database at `path`. Fails if a file is
    /// already there, matching `store.go`'s `Create` refusing to clobber.
    pub fn create(path: impl AsRef<Path>, password: &str, stretch: u32) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Err(Error::AlreadyExists(path.to_path_buf()));
        }
        let conn = Connection::open(path)?;
        db::apply_pragmas(&conn)?;
        conn.execute(schema::CREATE_SETTINGS, [])?;
        conn.execute(schema::CREATE_CREDENTIALS, [])?;

        let (keys, material) = KeyHierarchy::create(password, stretch)?;
        settings::insert(&conn, &material)?;

        Ok(Self {
            conn,
            keys,
            path: path.to_path_buf(),
        })
    }

    /// Open an existing database, unlocking the key hierarchy with
    /// `password`. A wrong password surfaces as `Error::IncorrectPassword`
    /// (the caller retries); any other error is fatal, matching
    /// `app.go`'s `openStore` retry policy.
    pub fn open(path: impl AsRef<Path>, password: &str) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let conn = Connection::open(path)?;
        db::apply_pragmas(&conn)?;

        let material = settings::load(&conn)?;
        let keys = KeyHierarchy::unlock(password, &material)?;

        Ok(Self {
            conn,
            keys,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encrypt and insert a new credential, committing the row and the
    /// DEK nonce counter in one transaction.
    pub fn add(&mut self, cred: &Credential) -> Result<i64> {
        let login = self.keys.encrypt_field(cred.login.as_bytes());
        let password = self.keys.encrypt_field(cred.password.as_bytes());
        let realm = self.keys.encrypt_field(cred.realm.as_bytes());
        let note = self.keys.encrypt_field(cred.note.as_bytes());
        let data_nonce = self.keys.data_nonce();

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO credentials (login, password, realm, note) VALUES (?1, ?2, ?3, ?4)",
            params![login, password, realm, note],
        )?;
        let id = tx.last_insert_rowid();
        settings::update_data_nonce(&tx, data_nonce)?;
        tx.commit()?;
        Ok(id)
    }

    fn decrypt_row(&self, id: i64, login: Vec<u8>, password: Vec<u8>, realm: Vec<u8>, note: Vec<u8>) -> Result<Credential> {
        Ok(Credential {
            id: Some(id),
            login: String::from_utf8_lossy(&self.keys.decrypt_field(&login)?).into_owned(),
            password: String::from_utf8_lossy(&self.keys.decrypt_field(&password)?).into_owned(),
            realm: String::from_utf8_lossy(&self.keys.decrypt_field(&realm)?).into_owned(),
            note: String::from_utf8_lossy(&self.keys.decrypt_field(&note)?).into_owned(),
        })
    }

    /// All credentials, decrypted, in id order. Grounded in `store.go`'s
    /// `eachCredential` (there implemented as a goroutine+channel stream;
    /// collected eagerly here since a password database is never large
    /// enough to warrant streaming).
    pub fn all(&self) -> Result<Vec<Credential>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, login, password, realm, note FROM credentials ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, Vec<u8>>(1)?,
                row.get::<_, Vec<u8>>(2)?,
                row.get::<_, Vec<u8>>(3)?,
                row.get::<_, Vec<u8>>(4)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (id, login, password, realm, note) = row?;
            out.push(self.decrypt_row(id, login, password, realm, note)?);
        }
        Ok(out)
    }

    /// Credentials where every pattern in `patterns` matches (case
    /// insensitive substring) somewhere in login, realm, or note — never
    /// password. The distilled spec's `find` takes an ordered list of
    /// patterns all of which must match, a stricter contract than
    /// `store.go`'s single-string `FindCredentials`.
    pub fn find(&self, patterns: &[String]) -> Result<Vec<Credential>> {
        if patterns.is_empty() {
            return self.all();
        }
        let needles: Vec<String> = patterns.iter().map(|p| p.to_lowercase()).collect();
        let all = self.all()?;
        Ok(all
            .into_iter()
            .filter(|c| {
                let haystack = format!("{} {} {}", c.login, c.realm, c.note).to_lowercase();
                needles.iter().all(|n| haystack.contains(n.as_str()))
            })
            .collect())
    }

    /// Re-encrypt and overwrite an existing credential in place.
    pub fn update(&mut self, cred: &Credential) -> Result<()> {
        let id = cred.id.ok_or(Error::InvalidId(-1))?;
        let exists: bool = self
            .conn
            .query_row(
                "SELECT 1 FROM credentials WHERE id = ?1",
                params![id],
                |_| Ok(true),
            )
            .unwrap_or(false);
        if !exists {
            return Err(Error::InvalidId(id));
        }

        let login = self.keys.encrypt_field(cred.login.as_bytes());
        let password = self.keys.encrypt_field(cred.password.as_bytes());
        let realm = self.keys.encrypt_field(cred.realm.as_bytes());
        let note = self.keys.encrypt_field(cred.note.as_bytes());
        let data_nonce = self.keys.data_nonce();

        let tx = self.conn.transaction()?;
        tx.execute(
            "UPDATE credentials SET login = ?1, password = ?2, realm = ?3, note = ?4 WHERE id = ?5",
            params![login, password, realm, note, id],
        )?;
        settings::update_data_nonce(&tx, data_nonce)?;
        tx.commit()?;
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let tx = self.conn.transaction()?;
        let affected = tx.execute("DELETE FROM credentials WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(Error::InvalidId(id));
        }
        tx.commit()?;
        Ok(())
    }

    /// Rotate the master password: re-wrap the DEK under a new KEK. No
    /// credential row is read, decrypted, or rewritten — the O(1) rotation
    /// the two-tier hierarchy exists for.
    pub fn rotate_master(&mut self, new_password: &str, stretch: u32) -> Result<()> {
        let material = self.keys.rotate(new_password, stretch)?;
        let tx = self.conn.transaction()?;
        settings::update_key_material(&tx, &material)?;
        tx.commit()?;
        Ok(())
    }

    /// Consume the store, closing the underlying connection.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, err)| Error::Storage(err))
    }
}
