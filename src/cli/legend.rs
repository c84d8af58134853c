use crate::board::legend::tag_legend;
use crate::cli::{finish, Workspace};
use crate::error::BoardError;
use crate::output;

pub fn run(json_output: bool) -> i32 {
    finish(run_inner(json_output), json_output)
}

fn run_inner(json_output: bool) -> Result<i32, BoardError> {
    let workspace = Workspace::open()?;
    let session = workspace.session()?;
    let legend = tag_legend(session.board());

    if json_output {
        output::json::print(&output::json::success(output::json::legend_json(&legend)));
    } else {
        output::text::print_legend(&legend);
    }
    Ok(0)
}
