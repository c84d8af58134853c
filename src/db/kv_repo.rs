use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::error::BoardError;

#[derive(Debug, Clone)]
pub struct StoredValue {
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

pub fn get_value(conn: &Connection, key: &str) -> Result<Option<StoredValue>, BoardError> {
    let mut stmt = conn.prepare("SELECT value, updated_at FROM kv WHERE key = ?1")?;
    let mut rows = stmt.query(params![key])?;
    match rows.next()? {
        Some(row) => {
            let updated_at: String = row.get(1)?;
            let updated_at = DateTime::parse_from_rfc3339(&updated_at)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| BoardError::database(format!("Bad timestamp for key '{key}': {e}")))?;
            Ok(Some(StoredValue {
                value: row.get(0)?,
                updated_at,
            }))
        }
        None => Ok(None),
    }
}

/// Insert or overwrite `key`, stamping the write time.
pub fn set_value(conn: &Connection, key: &str, value: &str) -> Result<(), BoardError> {
    conn.execute(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn delete_value(conn: &Connection, key: &str) -> Result<bool, BoardError> {
    let changed = conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
    Ok(changed > 0)
}
