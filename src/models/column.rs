use serde::{Deserialize, Serialize};

use super::Task;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tasks,
        }
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Copy of this column with its task list replaced.
    pub fn with_tasks(&self, tasks: Vec<Task>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            tasks,
        }
    }
}
