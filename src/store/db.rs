//! Connection setup. Grounded in
//! `examples/OpenIntentOS-OpenIntentOS/crates/openintent-store/src/db.rs`'s
//! `apply_pragmas`, simplified to the single-process, single-connection
//! case a CLI tool actually has — no WAL or busy-timeout tuning for
//! concurrent writers, since this spec's Non-goals exclude multi-process
//! concurrency over one database file (Open Question, decided in
//! DESIGN.md: "synchronous=NORMAL, foreign_keys=ON" is sufficient).

use rusqlite::Connection;

use crate::error::Result;

pub fn apply_pragmas(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true)?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    Ok(())
}
