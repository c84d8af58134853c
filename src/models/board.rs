use serde::{Deserialize, Serialize};

use super::{Column, Tag, Task};

/// Ordered list of columns. Serialized as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|c| c.tasks.is_empty())
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// The board a fresh session starts with: three fixed columns seeded
    /// with sample work.
    pub fn default_board() -> Self {
        fn task(id: &str, name: &str, description: &str, tag: &str, color: &str) -> Task {
            Task::new(id, name, description, vec![Tag::new(tag, color)])
        }

        Self::new(vec![
            Column::new(
                "column-1",
                "To Do",
                vec![
                    task("task-1", "Fix login bug", "Users cannot log in with Google on mobile devices.", "BUG", "red"),
                    task("task-2", "Write docs", "Document the new API endpoints for the frontend team.", "DOC", "blue"),
                    task("task-3", "Design dashboard", "Create a new dashboard layout for analytics.", "UI", "green"),
                    task("task-4", "Add dark mode", "Implement dark mode toggle in settings.", "UI", "green"),
                ],
            ),
            Column::new(
                "column-2",
                "In Progress",
                vec![
                    task("task-5", "Refactor auth", "Refactor authentication logic for better maintainability.", "CODE", "brown"),
                    task("task-6", "Write tests", "Add unit tests for the user service.", "CODE", "brown"),
                ],
            ),
            Column::new(
                "column-3",
                "Completed",
                vec![
                    task("task-7", "Setup CI", "Continuous integration pipeline for PRs.", "OPS", "orange"),
                    task("task-8", "Initial setup", "Project structure and dependencies.", "INIT", "purple"),
                ],
            ),
        ])
    }
}
