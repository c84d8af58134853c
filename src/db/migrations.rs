use rusqlite::Connection;

use crate::error::BoardError;

pub fn run_migrations(conn: &Connection) -> Result<(), BoardError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}
