use chrono::{DateTime, Utc};
use rusqlite::Connection;
use tracing::debug;

use crate::board::manager::{BoardManager, Outcome};
use crate::board::normalize;
use crate::db::kv_repo;
use crate::error::BoardError;
use crate::models::Board;

/// Key suffix under which the session's "cleared on purpose" flag is kept.
const CLEARED_SUFFIX: &str = ":cleared";

/// A board loaded from the key-value store. Every applied mutation is
/// written back in full before the call returns.
pub struct BoardSession<'c> {
    conn: &'c Connection,
    storage_key: String,
    manager: BoardManager,
    saved_at: Option<DateTime<Utc>>,
}

impl<'c> BoardSession<'c> {
    pub fn open(conn: &'c Connection, storage_key: &str) -> Result<Self, BoardError> {
        let stored = kv_repo::get_value(conn, storage_key)?;
        let board = normalize::load_board(stored.as_ref().map(|s| s.value.as_str()));
        let cleared = kv_repo::get_value(conn, &cleared_key(storage_key))?
            .is_some_and(|s| s.value == "true");
        debug!(key = storage_key, cleared, tasks = board.task_count(), "board loaded");

        let mut manager = BoardManager::new(board, cleared);
        manager.restore_default_if_empty();

        let mut session = Self {
            conn,
            storage_key: storage_key.to_string(),
            manager,
            saved_at: stored.as_ref().map(|s| s.updated_at),
        };

        // Write back whatever loading produced (migrated or defaulted) so the
        // stored blob is always in the current shape.
        let current = serde_json::to_string(session.manager.board())
            .map_err(|e| BoardError::database(e.to_string()))?;
        if stored.map(|s| s.value) != Some(current) {
            session.save()?;
        }
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        self.manager.board()
    }

    pub fn manager(&self) -> &BoardManager {
        &self.manager
    }

    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.saved_at
    }

    /// Run one mutation against the board and persist it if it applied.
    pub fn apply<F>(&mut self, mutation: F) -> Result<Outcome, BoardError>
    where
        F: FnOnce(&mut BoardManager) -> Outcome,
    {
        let outcome = mutation(&mut self.manager);
        if outcome.is_applied() {
            self.save()?;
        }
        Ok(outcome)
    }

    /// Start a fresh session on the default board.
    pub fn reset(&mut self) -> Result<(), BoardError> {
        self.manager = BoardManager::new(Board::default_board(), false);
        self.save()
    }

    fn save(&mut self) -> Result<(), BoardError> {
        let json = serde_json::to_string(self.manager.board())
            .map_err(|e| BoardError::database(e.to_string()))?;
        let flag_key = cleared_key(&self.storage_key);

        self.conn.execute_batch("BEGIN IMMEDIATE")?;
        let result = (|| -> Result<(), BoardError> {
            kv_repo::set_value(self.conn, &self.storage_key, &json)?;
            if self.manager.is_explicitly_cleared() {
                kv_repo::set_value(self.conn, &flag_key, "true")?;
            } else {
                kv_repo::delete_value(self.conn, &flag_key)?;
            }
            Ok(())
        })();

        match result {
            Ok(()) => self.conn.execute_batch("COMMIT")?,
            Err(e) => {
                let _ = self.conn.execute_batch("ROLLBACK");
                return Err(e);
            }
        }

        self.saved_at = kv_repo::get_value(self.conn, &self.storage_key)?.map(|s| s.updated_at);
        debug!(key = %self.storage_key, bytes = json.len(), "board saved");
        Ok(())
    }
}

fn cleared_key(storage_key: &str) -> String {
    format!("{storage_key}{CLEARED_SUFFIX}")
}
