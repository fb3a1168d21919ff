//! End-to-end store scenarios against a real SQLite file on disk. Grounded
//! in `examples/OpenIntentOS-OpenIntentOS/crates/openintent-store/tests/
//! integration.rs`'s tempfile-fixture style, adapted to synchronous
//! `rusqlite` since this store has no async runtime.

use cipherkeep_core::store::Store;
use cipherkeep_core::types::Credential;
use cipherkeep_core::Error;

fn db_path(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
    dir.path().join(name)
}

#[test]
fn create_add_reopen_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = db_path(&dir, "vault.db");

    let mut store = Store::create(&path, "correct horse battery staple", 1000).unwrap();
    store
        .add(&Credential::new("alice", "hunter2", "example.com", "work"))
        .unwrap();
    store
        .add(&Credential::new("bob", "swordfish", "example.org", ""))
        .unwrap();
    store.close().unwrap();

    let reopened = Store::open(&path, "correct horse battery staple").unwrap();
    let all = reopened.all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].login, "alice");
    assert_eq!(all[0].password, "hunter2");
    assert_eq!(all[1].login, "bob");
    reopened.close().unwrap();
}

#[test]
fn create_refuses_to_clobber_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = db_path(&dir, "vault.db");
    Store::create(&path, "pw", 1000).unwrap().close().unwrap();

    assert!(matches!(
        Store::create(&path, "pw", 1000),
        Err(Error::AlreadyExists(_))
    ));
}

#[test]
fn open_with_wrong_password_is_recoverable() {
    let dir = tempfile::tempdir().unwrap();
    let path = db_path(&dir, "vault.db");
    Store::create(&path, "right-password", 1000)
        .unwrap()
        .close()
        .unwrap();

    assert!(matches!(
        Store::open(&path, "wrong-password"),
        Err(Error::IncorrectPassword)
    ));
}

#[test]
fn open_nonexistent_path_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = db_path(&dir, "missing.db");
    assert!(matches!(Store::open(&path, "pw"), Err(Error::NotFound(_))));
}

#[test]
fn multi_pattern_find_requires_all_patterns_to_match() {
    let dir = tempfile::tempdir().unwrap();
    let path = db_path(&dir, "vault.db");
    let mut store = Store::create(&path, "pw", 1000).unwrap();

    store
        .add(&Credential::new("alice", "p1", "github.com", "work account"))
        .unwrap();
    store
        .add(&Credential::new("alice", "p2", "gitlab.com", "personal"))
        .unwrap();
    store
        .add(&Credential::new("bob", "p3", "github.com", ""))
        .unwrap();

    let results = store
        .find(&["alice".to_string(), "github".to_string()])
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].realm, "github.com");

    let results = store.find(&["alice".to_string()]).unwrap();
    assert_eq!(results.len(), 2);

    // Never matches against the password field.
    let results = store.find(&["p1".to_string()]).unwrap();
    assert!(results.is_empty());

    store.close().unwrap();
}

#[test]
fn update_and_delete_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = db_path(&dir, "vault.db");
    let mut store = Store::create(&path, "pw", 1000).unwrap();

    let id = store
        .add(&Credential::new("alice", "old-password", "example.com", ""))
        .unwrap();

    let mut updated = store.all().unwrap().into_iter().next().unwrap();
    assert_eq!(updated.id, Some(id));
    updated.password = "new-password".to_string();
    store.update(&updated).unwrap();

    let fetched = store.all().unwrap();
    assert_eq!(fetched[0].password, "new-password");

    store.delete(id).unwrap();
    assert!(store.all().unwrap().is_empty());

    assert!(matches!(store.delete(id), Err(Error::InvalidId(_))));
    store.close().unwrap();
}

#[test]
fn master_password_rotation_preserves_all_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let path = db_path(&dir, "vault.db");
    let mut store = Store::create(&path, "old-password", 1000).unwrap();

    for i in 0..100 {
        store
            .add(&Credential::new(
                format!("user{i}"),
                format!("password{i}"),
                format!("realm{i}.example.com"),
                "",
            ))
            .unwrap();
    }

    store.rotate_master("new-password", 1000).unwrap();
    store.close().unwrap();

    assert!(matches!(
        Store::open(&path, "old-password"),
        Err(Error::IncorrectPassword)
    ));

    let reopened = Store::open(&path, "new-password").unwrap();
    let all = reopened.all().unwrap();
    assert_eq!(all.len(), 100);
    for (i, cred) in all.iter().enumerate() {
        assert_eq!(cred.login, format!("user{i}"));
        assert_eq!(cred.password, format!("password{i}"));
    }
    reopened.close().unwrap();
}

#[test]
fn truncated_encrypted_key_is_fatal_not_recoverable() {
    use rusqlite::Connection;

    let dir = tempfile::tempdir().unwrap();
    let path = db_path(&dir, "vault.db");
    Store::create(&path, "pw", 1000).unwrap().close().unwrap();

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute("UPDATE settings SET encrypted_key = x''", [])
            .unwrap();
    }

    // A corrupt settings row must surface as InvalidSettings, not
    // IncorrectPassword -- the CLI's open-loop only retries on the latter,
    // so misclassifying this would spin forever re-prompting for a
    // password that can never succeed.
    assert!(matches!(
        Store::open(&path, "pw"),
        Err(Error::InvalidSettings(_))
    ));
}

#[test]
fn rejects_a_database_from_a_future_version() {
    use rusqlite::Connection;

    let dir = tempfile::tempdir().unwrap();
    let path = db_path(&dir, "vault.db");
    Store::create(&path, "pw", 1000).unwrap().close().unwrap();

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute("UPDATE settings SET version = 2", []).unwrap();
    }

    assert!(matches!(
        Store::open(&path, "pw"),
        Err(Error::BadVersion(2))
    ));
}
