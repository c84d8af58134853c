use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};
use ulid::{Generator, Ulid};

use super::Tag;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<Tag>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            tags,
        }
    }

    /// Record produced for task entries whose shape is not recognized.
    pub fn placeholder() -> Self {
        Self::new("", "", "", Vec::new())
    }
}

/// Generate a fresh task id (`task-<ULID>`).
///
/// Ids come from a process-wide monotonic generator, so two tasks created in
/// the same millisecond still get distinct, increasing ids.
pub fn next_task_id() -> String {
    static GENERATOR: OnceLock<Mutex<Generator>> = OnceLock::new();
    let generator = GENERATOR.get_or_init(|| Mutex::new(Generator::new()));
    let ulid = match generator.lock() {
        Ok(mut g) => g.generate().unwrap_or_else(|_| Ulid::new()),
        Err(_) => Ulid::new(),
    };
    format!("task-{ulid}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let ids: Vec<String> = (0..100).map(|_| next_task_id()).collect();
        assert!(ids.iter().all(|id| id.starts_with("task-")));
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_missing_description_and_tags_default() {
        let task: Task = serde_json::from_str(r#"{"id":"t1","name":"n"}"#).unwrap();
        assert_eq!(task.description, "");
        assert!(task.tags.is_empty());
    }
}
