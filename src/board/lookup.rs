use crate::error::BoardError;
use crate::models::{Board, Column, Task};

/// Resolve a column reference: exact id → title (any case).
pub fn resolve_column<'a>(board: &'a Board, reference: &str) -> Result<&'a Column, BoardError> {
    if let Some(column) = board.column(reference) {
        return Ok(column);
    }
    let wanted = reference.trim();
    board
        .columns
        .iter()
        .find(|c| c.title.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| BoardError::column_not_found(reference))
}

/// Resolve a task inside a column: exact id → unique id prefix.
pub fn resolve_task<'a>(column: &'a Column, reference: &str) -> Result<&'a Task, BoardError> {
    if let Some(task) = column.task(reference) {
        return Ok(task);
    }
    if reference.is_empty() {
        return Err(BoardError::task_not_found(reference));
    }

    let matches: Vec<&Task> = column
        .tasks
        .iter()
        .filter(|t| t.id.starts_with(reference))
        .collect();
    match matches.as_slice() {
        [] => Err(BoardError::task_not_found(reference)),
        [task] => Ok(*task),
        _ => {
            let candidates: Vec<String> = matches.iter().map(|t| format!("{} ({})", t.name, t.id)).collect();
            Err(BoardError::ambiguous_ref(reference, &candidates))
        }
    }
}

/// Position of a task in its column.
pub fn task_position(column: &Column, task_id: &str) -> Option<usize> {
    column.tasks.iter().position(|t| t.id == task_id)
}
