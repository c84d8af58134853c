use std::io::{self, Read};

use serde_json::json;

use crate::board::lookup::{resolve_column, resolve_task, task_position};
use crate::board::validate::duplicate_positions;
use crate::board::{BoardSession, DropResult, Outcome, Rejection};
use crate::cli::commands::TaskCommands;
use crate::cli::{finish, Workspace};
use crate::error::{BoardError, ErrorCode};
use crate::models::{Tag, TagColor};
use crate::output;

pub fn run(cmd: TaskCommands, json_output: bool) -> i32 {
    let result = match cmd {
        TaskCommands::Add { column, name, description, tags } => {
            run_add(&column, &name, &description, &tags, json_output)
        }
        TaskCommands::Edit { column, task, name, description, tags, clear_tags } => run_edit(
            &column,
            &task,
            name.as_deref(),
            description.as_deref(),
            &tags,
            clear_tags,
            json_output,
        ),
        TaskCommands::Show { column, task } => run_show(&column, &task, json_output),
        TaskCommands::Delete { column, task } => run_delete(&column, &task, json_output),
        TaskCommands::Move { source, source_index, destination, dest_index } => {
            run_move(&source, source_index, &destination, dest_index, json_output)
        }
        TaskCommands::Drop => run_drop(json_output),
    };
    finish(result, json_output)
}

/// Parse `NAME` or `NAME:COLOR`. The color must be a palette name or hex code.
pub fn parse_tag(input: &str, default_color: TagColor) -> Result<Tag, BoardError> {
    match input.rsplit_once(':') {
        Some((name, color)) if !color.is_empty() => {
            let color = TagColor::from_str(color).ok_or_else(|| {
                let palette: Vec<&str> = TagColor::PALETTE.iter().map(|c| c.as_str()).collect();
                BoardError::validation(format!(
                    "Unknown tag color '{color}'. Use one of: {}",
                    palette.join(", ")
                ))
            })?;
            Ok(Tag::new(name, color.as_str()))
        }
        _ => Ok(Tag::new(input.trim_end_matches(':'), default_color.as_str())),
    }
}

fn parse_tags(specs: &[String], default_color: TagColor) -> Result<Vec<Tag>, BoardError> {
    specs.iter().map(|s| parse_tag(s, default_color)).collect()
}

/// Turn a refused mutation into an error, naming offending tags if any.
fn refused(outcome: Outcome, tags: &[Tag]) -> Result<(), BoardError> {
    match outcome {
        Outcome::Applied => Ok(()),
        Outcome::Ignored(Rejection::InvalidTags) => {
            let dupes: Vec<&str> = duplicate_positions(tags)
                .into_iter()
                .map(|i| tags[i].name.as_str())
                .collect();
            let message = if dupes.is_empty() {
                "Tag names must not be empty".to_string()
            } else {
                format!("Duplicate tag names: {}", dupes.join(", "))
            };
            Err(BoardError::new(ErrorCode::InvalidTags, message))
        }
        Outcome::Ignored(r) => Err(r.into()),
    }
}

fn run_add(
    column_ref: &str,
    name: &str,
    description: &str,
    tag_specs: &[String],
    json_output: bool,
) -> Result<i32, BoardError> {
    let workspace = Workspace::open()?;
    let tags = parse_tags(tag_specs, workspace.config.default_tag_color)?;
    let mut session = workspace.session()?;
    let column_id = resolve_column(session.board(), column_ref)?.id.clone();

    let outcome = session.apply(|m| m.add_task(&column_id, name, description, &tags))?;
    refused(outcome, &tags)?;

    let column = resolve_column(session.board(), &column_id)?;
    let index = column.tasks.len().saturating_sub(1);
    let task = column
        .tasks
        .last()
        .ok_or_else(|| BoardError::task_not_found(name))?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "task": output::json::placed_task_json(column, index, task)
        })));
    } else {
        println!("Added task: {} ({}) to {}", task.name, task.id, column.title);
    }
    Ok(0)
}

fn run_edit(
    column_ref: &str,
    task_ref: &str,
    name: Option<&str>,
    description: Option<&str>,
    tag_specs: &[String],
    clear_tags: bool,
    json_output: bool,
) -> Result<i32, BoardError> {
    let workspace = Workspace::open()?;
    let new_tags = parse_tags(tag_specs, workspace.config.default_tag_color)?;
    let mut session = workspace.session()?;

    let column = resolve_column(session.board(), column_ref)?;
    let current = resolve_task(column, task_ref)?;
    let column_id = column.id.clone();
    let task_id = current.id.clone();
    let name = name.unwrap_or(current.name.as_str()).to_string();
    let description = description.unwrap_or(current.description.as_str()).to_string();
    let tags = if clear_tags {
        Vec::new()
    } else if new_tags.is_empty() {
        current.tags.clone()
    } else {
        new_tags
    };

    let outcome = session.apply(|m| m.edit_task(&column_id, &task_id, &name, &description, &tags))?;
    refused(outcome, &tags)?;

    let column = resolve_column(session.board(), &column_id)?;
    let task = resolve_task(column, &task_id)?;
    if json_output {
        let index = task_position(column, &task_id).unwrap_or_default();
        output::json::print(&output::json::success(json!({
            "task": output::json::placed_task_json(column, index, task)
        })));
    } else {
        println!("Updated task: {} ({})", task.name, task.id);
    }
    Ok(0)
}

fn run_show(column_ref: &str, task_ref: &str, json_output: bool) -> Result<i32, BoardError> {
    let workspace = Workspace::open()?;
    let session = workspace.session()?;
    let column = resolve_column(session.board(), column_ref)?;
    let task = resolve_task(column, task_ref)?;

    if json_output {
        let index = task_position(column, &task.id).unwrap_or_default();
        output::json::print(&output::json::success(json!({
            "task": output::json::placed_task_json(column, index, task)
        })));
    } else {
        output::text::print_task(task);
        println!("  Column: {} [{}]", column.title, column.id);
    }
    Ok(0)
}

fn run_delete(column_ref: &str, task_ref: &str, json_output: bool) -> Result<i32, BoardError> {
    let workspace = Workspace::open()?;
    let mut session = workspace.session()?;
    let column = resolve_column(session.board(), column_ref)?;
    let task = resolve_task(column, task_ref)?;
    let column_id = column.id.clone();
    let task_id = task.id.clone();
    let task_name = task.name.clone();

    session.apply(|m| m.delete_task(&column_id, &task_id))?.into_result()?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "deleted": { "id": task_id, "name": task_name, "column_id": column_id },
            "task_count": session.board().task_count()
        })));
    } else {
        println!("Deleted task: {task_name} ({task_id})");
    }
    Ok(0)
}

fn run_move(
    source_ref: &str,
    source_index: usize,
    dest_ref: &str,
    dest_index: usize,
    json_output: bool,
) -> Result<i32, BoardError> {
    let workspace = Workspace::open()?;
    let mut session = workspace.session()?;
    let source_id = resolve_column(session.board(), source_ref)?.id.clone();
    let dest_id = resolve_column(session.board(), dest_ref)?.id.clone();

    session
        .apply(|m| m.move_task(&source_id, source_index, &dest_id, dest_index))?
        .into_result()?;
    print_moved(&session, &dest_id, dest_index, json_output)
}

fn run_drop(json_output: bool) -> Result<i32, BoardError> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| BoardError::validation(e.to_string()))?;
    let gesture: DropResult = serde_json::from_str(&input)
        .map_err(|e| BoardError::validation(format!("Invalid drop result: {e}")))?;

    let workspace = Workspace::open()?;
    let mut session = workspace.session()?;
    match session.apply(|m| m.apply_drop(&gesture))? {
        Outcome::Ignored(Rejection::NoDestination) => {
            if json_output {
                output::json::print(&output::json::success(json!({ "moved": false })));
            } else {
                println!("Nothing to move.");
            }
            Ok(0)
        }
        outcome => {
            outcome.into_result()?;
            let destination = gesture
                .destination
                .ok_or_else(|| BoardError::from(Rejection::NoDestination))?;
            print_moved(&session, &destination.droppable_id, destination.index, json_output)
        }
    }
}

fn print_moved(
    session: &BoardSession<'_>,
    column_id: &str,
    index: usize,
    json_output: bool,
) -> Result<i32, BoardError> {
    let column = resolve_column(session.board(), column_id)?;
    let task = column
        .tasks
        .get(index)
        .ok_or_else(|| BoardError::from(Rejection::IndexOutOfRange))?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "moved": true,
            "task": output::json::placed_task_json(column, index, task)
        })));
    } else {
        println!("Moved {} ({}) to {} at {}", task.name, task.id, column.title, index);
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_with_color() {
        let tag = parse_tag("BUG:Red", TagColor::Blue).unwrap();
        assert_eq!(tag, Tag::new("BUG", "red"));
    }

    #[test]
    fn test_parse_tag_default_color() {
        assert_eq!(parse_tag("DOC", TagColor::Teal).unwrap(), Tag::new("DOC", "teal"));
        assert_eq!(parse_tag("DOC:", TagColor::Blue).unwrap(), Tag::new("DOC", "blue"));
    }

    #[test]
    fn test_parse_tag_keeps_colons_in_name() {
        let tag = parse_tag("scope:api:green", TagColor::Blue).unwrap();
        assert_eq!(tag, Tag::new("scope:api", "green"));
    }

    #[test]
    fn test_parse_tag_unknown_color() {
        let err = parse_tag("BUG:magenta", TagColor::Blue).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
