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
    session.reset()?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "task_count": session.board().task_count()
        })));
    } else {
        println!("Board reset to the sample board.");
    }
    Ok(0)
}
