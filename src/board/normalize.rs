//! Load-time migration of persisted boards.
//!
//! Stored boards may come from any earlier build, so nothing here trusts the
//! input shape. Each task record is classified by an ordered set of shape
//! predicates and rebuilt by the constructor that sits next to its predicate.
//! A record that matches nothing becomes an empty placeholder; only a blob
//! that is not a list of column objects is discarded as a whole.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::models::{Board, Column, Tag, Task};

/// Color given to tags that older builds stored as bare strings.
pub const LEGACY_TAG_COLOR: &str = "gray";

/// Bare-string tags are cut to this many characters when promoted.
pub const LEGACY_TAG_NAME_LEN: usize = 5;

/// The shape a persisted task record was written in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordShape<'a> {
    /// Has `name` and `description`; tags may still be bare strings.
    Current(&'a Map<String, Value>),
    /// Pre-name/description record: `{ id, content }`.
    Legacy(&'a Map<String, Value>),
    Unknown,
}

impl<'a> RecordShape<'a> {
    pub fn classify(record: &'a Value) -> Self {
        let Some(obj) = record.as_object() else {
            return Self::Unknown;
        };
        if is_current(obj) {
            Self::Current(obj)
        } else if is_legacy(obj) {
            Self::Legacy(obj)
        } else {
            Self::Unknown
        }
    }

    pub fn into_task(self) -> Task {
        match self {
            Self::Current(obj) => current_task(obj),
            Self::Legacy(obj) => legacy_task(obj),
            Self::Unknown => Task::placeholder(),
        }
    }
}

fn is_current(obj: &Map<String, Value>) -> bool {
    obj.contains_key("name") && obj.contains_key("description")
}

fn current_task(obj: &Map<String, Value>) -> Task {
    let tags = match obj.get("tags") {
        Some(Value::Array(items)) => items.iter().filter_map(promote_tag).collect(),
        _ => Vec::new(),
    };
    Task::new(
        text(obj.get("id")),
        text(obj.get("name")),
        text(obj.get("description")),
        tags,
    )
}

fn is_legacy(obj: &Map<String, Value>) -> bool {
    obj.contains_key("id")
}

fn legacy_task(obj: &Map<String, Value>) -> Task {
    Task::new(text(obj.get("id")), text(obj.get("content")), "", Vec::new())
}

fn promote_tag(item: &Value) -> Option<Tag> {
    match item {
        Value::String(s) => Some(Tag::new(
            s.chars().take(LEGACY_TAG_NAME_LEN).collect::<String>(),
            LEGACY_TAG_COLOR,
        )),
        Value::Object(obj) => Some(Tag::new(text(obj.get("name")), text(obj.get("color")))),
        _ => None,
    }
}

/// Render a scalar field as text. Missing, null, and structured values are
/// treated as empty.
fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

pub fn normalize_task(record: &Value) -> Task {
    RecordShape::classify(record).into_task()
}

/// Normalize a parsed board. Returns `None` when the value is not a list of
/// column objects.
pub fn normalize_board(value: &Value) -> Option<Board> {
    let columns = value.as_array()?;
    let columns = columns
        .iter()
        .map(|col| {
            let obj = col.as_object()?;
            let tasks = match obj.get("tasks") {
                Some(Value::Array(records)) => records.iter().map(normalize_task).collect(),
                _ => Vec::new(),
            };
            Some(Column::new(text(obj.get("id")), text(obj.get("title")), tasks))
        })
        .collect::<Option<Vec<_>>>()?;
    Some(Board::new(columns))
}

/// Build the session's starting board from the stored blob, if any.
pub fn load_board(raw: Option<&str>) -> Board {
    let Some(raw) = raw else {
        debug!("no stored board, using default");
        return Board::default_board();
    };
    let parsed = match serde_json::from_str::<Value>(raw) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "stored board is not valid JSON, using default");
            return Board::default_board();
        }
    };
    match normalize_board(&parsed) {
        Some(board) => board,
        None => {
            warn!("stored board is not a list of columns, using default");
            Board::default_board()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_string_tags_are_promoted() {
        let task = normalize_task(&json!({
            "id": "t1", "name": "n", "description": "d", "tags": ["urgent", "ui"]
        }));
        assert_eq!(
            task.tags,
            vec![Tag::new("urgen", "gray"), Tag::new("ui", "gray")]
        );
    }

    #[test]
    fn test_promotion_counts_characters_not_bytes() {
        let task = normalize_task(&json!({
            "id": "t1", "name": "n", "description": "d", "tags": ["ÜberFix"]
        }));
        assert_eq!(task.tags[0].name, "ÜberF");
    }

    #[test]
    fn test_object_tags_pass_through() {
        let task = normalize_task(&json!({
            "id": "t1", "name": "n", "description": "d",
            "tags": [{"name": "BUG", "color": "#d32f2f"}, 7, null]
        }));
        assert_eq!(task.tags, vec![Tag::new("BUG", "#d32f2f")]);
    }

    #[test]
    fn test_missing_or_malformed_tags_default_to_empty() {
        let no_tags = normalize_task(&json!({"id": "t1", "name": "n", "description": "d"}));
        assert!(no_tags.tags.is_empty());
        let bad_tags = normalize_task(&json!({"id": "t1", "name": "n", "description": "d", "tags": "BUG"}));
        assert!(bad_tags.tags.is_empty());
    }

    #[test]
    fn test_very_old_shape() {
        let task = normalize_task(&json!({"id": "t1", "content": "Buy milk"}));
        assert_eq!(task, Task::new("t1", "Buy milk", "", Vec::new()));

        let no_content = normalize_task(&json!({"id": "t2"}));
        assert_eq!(no_content, Task::new("t2", "", "", Vec::new()));
    }

    #[test]
    fn test_name_without_description_falls_back_to_legacy() {
        let task = normalize_task(&json!({"id": "t1", "name": "half", "content": "c"}));
        assert_eq!(task, Task::new("t1", "c", "", Vec::new()));
    }

    #[test]
    fn test_garbage_records_become_placeholders() {
        for record in [json!(42), json!(null), json!("task"), json!([1, 2]), json!({"title": "x"})] {
            assert_eq!(normalize_task(&record), Task::placeholder(), "{record}");
        }
    }

    #[test]
    fn test_classify_order() {
        let both = json!({"id": "a", "name": "n", "description": ""});
        assert!(matches!(RecordShape::classify(&both), RecordShape::Current(_)));
        let legacy = json!({"id": "a"});
        assert!(matches!(RecordShape::classify(&legacy), RecordShape::Legacy(_)));
        assert_eq!(RecordShape::classify(&json!(1)), RecordShape::Unknown);
    }

    #[test]
    fn test_numeric_ids_are_rendered_as_text() {
        let task = normalize_task(&json!({"id": 17, "content": "c"}));
        assert_eq!(task.id, "17");
    }

    #[test]
    fn test_column_without_tasks() {
        let board = normalize_board(&json!([{"id": "column-1", "title": "To Do"}])).unwrap();
        assert_eq!(board.columns[0].id, "column-1");
        assert!(board.columns[0].tasks.is_empty());
    }

    #[test]
    fn test_non_array_board_is_rejected() {
        assert!(normalize_board(&json!({"columns": []})).is_none());
        assert!(normalize_board(&json!([null])).is_none());
    }

    #[test]
    fn test_load_board_falls_back_to_default() {
        assert_eq!(load_board(None), Board::default_board());
        assert_eq!(load_board(Some("{not json")), Board::default_board());
        assert_eq!(load_board(Some("\"text\"")), Board::default_board());
    }

    #[test]
    fn test_current_board_is_unchanged() {
        let board = Board::default_board();
        let raw = serde_json::to_string(&board).unwrap();
        assert_eq!(load_board(Some(&raw)), board);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let raw = json!([{
            "id": "column-1", "title": "To Do",
            "tasks": [
                {"id": "t1", "name": "a", "description": "", "tags": ["legacy"]},
                {"id": "t2", "content": "old"},
                null
            ]
        }]);
        let once = normalize_board(&raw).unwrap();
        let twice = normalize_board(&serde_json::to_value(&once).unwrap()).unwrap();
        assert_eq!(once, twice);
    }
}
