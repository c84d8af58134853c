use serde_json::json;

use crate::cli::{finish, Workspace};
use crate::error::BoardError;
use crate::output;

pub fn run(json_output: bool) -> i32 {
    finish(run_inner(json_output), json_output)
}

fn run_inner(json_output: bool) -> Result<i32, BoardError> {
    let workspace = Workspace::open()?;
    let mut session = workspace.session()?;
    let removed = session.board().task_count();
    session.apply(|m| m.clear_all())?.into_result()?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "removed": removed,
            "explicitly_cleared": true
        })));
    } else {
        println!("Deleted {removed} task(s). The board stays empty until `taskboard reset`.");
    }
    Ok(0)
}
