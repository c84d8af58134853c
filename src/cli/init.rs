use serde_json::json;

use crate::cli::{finish, Workspace};
use crate::config::Config;
use crate::db::connection;
use crate::error::BoardError;
use crate::output;

pub fn run(json_output: bool) -> i32 {
    finish(run_inner(json_output), json_output)
}

fn run_inner(json_output: bool) -> Result<i32, BoardError> {
    let path = connection::init_db()?;
    let config_written = Config::write_default_if_missing(&connection::config_path()?)?;

    // Opening the board once stores the sample board on a fresh database.
    let workspace = Workspace::open()?;
    let session = workspace.session()?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "path": path.to_string_lossy(),
            "config_written": config_written,
            "task_count": session.board().task_count()
        })));
    } else {
        println!("Initialized taskboard at {}", path.display());
    }
    Ok(0)
}
