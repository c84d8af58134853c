use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::error::BoardError;
use crate::models::{Board, Column, Tag, TagColor, Task};

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &BoardError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn tag_json(tag: &Tag) -> Value {
    let mut v = json!({
        "name": tag.name,
        "color": tag.color
    });
    if let Some(color) = TagColor::from_str(&tag.color) {
        v["hex"] = json!(color.hex());
    }
    v
}

pub fn task_json(t: &Task) -> Value {
    json!({
        "id": t.id,
        "name": t.name,
        "description": t.description,
        "tags": t.tags.iter().map(tag_json).collect::<Vec<_>>()
    })
}

/// Task plus where it sits on the board.
pub fn placed_task_json(column: &Column, index: usize, t: &Task) -> Value {
    let mut v = task_json(t);
    v["column_id"] = json!(column.id);
    v["index"] = json!(index);
    v
}

pub fn column_json(c: &Column) -> Value {
    json!({
        "id": c.id,
        "title": c.title,
        "tasks": c.tasks.iter().map(task_json).collect::<Vec<_>>()
    })
}

pub fn board_json(board: &Board, explicitly_cleared: bool, saved_at: Option<DateTime<Utc>>) -> Value {
    json!({
        "columns": board.columns.iter().map(column_json).collect::<Vec<_>>(),
        "task_count": board.task_count(),
        "explicitly_cleared": explicitly_cleared,
        "saved_at": saved_at.map(|t| t.to_rfc3339())
    })
}

pub fn legend_json(legend: &[Tag]) -> Value {
    json!({
        "tags": legend.iter().map(tag_json).collect::<Vec<_>>()
    })
}

/// Pretty-print a JSON document to stdout.
pub fn print(v: &Value) {
    println!("{v:#}");
}
