use std::env;
use std::fs;
use std::path::PathBuf;

use rusqlite::Connection;

use crate::error::{BoardError, ErrorCode};

use super::migrations;

/// Find the .git root by walking up from current directory.
pub fn find_git_root() -> Result<PathBuf, BoardError> {
    let mut dir = env::current_dir().map_err(|e| BoardError::database(e.to_string()))?;
    loop {
        if dir.join(".git").exists() {
            return Ok(dir);
        }
        if !dir.pop() {
            return Err(BoardError::new(
                ErrorCode::NotInitialized,
                "Not inside a git repository. taskboard keeps one board per repository.",
            ));
        }
    }
}

/// Directory holding the board database and its config.
pub fn data_dir() -> Result<PathBuf, BoardError> {
    let root = find_git_root()?;
    Ok(root.join(".worktoolai").join("taskboard"))
}

pub fn db_path() -> Result<PathBuf, BoardError> {
    Ok(data_dir()?.join("taskboard.db"))
}

pub fn config_path() -> Result<PathBuf, BoardError> {
    Ok(data_dir()?.join("config.json"))
}

/// Open a connection to the database. Returns error if not initialized.
pub fn open_db() -> Result<Connection, BoardError> {
    let path = db_path()?;
    if !path.exists() {
        return Err(BoardError::not_initialized());
    }
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Create the data directory and database, then run migrations.
pub fn init_db() -> Result<PathBuf, BoardError> {
    let path = db_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BoardError::database(e.to_string()))?;
    }
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(path)
}

/// Migrated in-memory database, used by tests.
pub fn open_in_memory() -> Result<Connection, BoardError> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

fn configure_connection(conn: &Connection) -> Result<(), BoardError> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA busy_timeout=5000;",
    )?;
    Ok(())
}
