pub mod board;
pub mod clear;
pub mod commands;
pub mod init;
pub mod legend;
pub mod reset;
pub mod task;

pub use commands::*;

use rusqlite::Connection;

use crate::board::BoardSession;
use crate::config::Config;
use crate::db::connection;
use crate::error::BoardError;
use crate::output;

/// Config plus an open database for one command.
pub struct Workspace {
    pub config: Config,
    pub conn: Connection,
}

impl Workspace {
    pub fn open() -> Result<Self, BoardError> {
        let conn = connection::open_db()?;
        let config = Config::load()?;
        Ok(Self { config, conn })
    }

    pub fn session(&self) -> Result<BoardSession<'_>, BoardError> {
        BoardSession::open(&self.conn, &self.config.storage_key)
    }
}

/// Map a command result to an exit code, reporting any error.
pub fn finish(result: Result<i32, BoardError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(code = e.code.as_str(), "command failed");
            if json_output {
                output::json::print(&output::json::error(&e));
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}
