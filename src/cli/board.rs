use crate::cli::{finish, Workspace};
use crate::error::BoardError;
use crate::output;

pub fn run(json_output: bool) -> i32 {
    finish(run_inner(json_output), json_output)
}

fn run_inner(json_output: bool) -> Result<i32, BoardError> {
    let workspace = Workspace::open()?;
    let session = workspace.session()?;

    if json_output {
        output::json::print(&output::json::success(output::json::board_json(
            session.board(),
            session.manager().is_explicitly_cleared(),
            session.saved_at(),
        )));
    } else {
        output::text::print_board(session.board(), session.saved_at());
    }
    Ok(0)
}
