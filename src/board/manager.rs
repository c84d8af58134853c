use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::board::validate;
use crate::models::{next_task_id, Board, Tag, Task};

/// Why a mutation left the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Task name must not be empty")]
    EmptyName,
    #[error("Tag names must be non-empty and unique within a task")]
    InvalidTags,
    #[error("Column not found")]
    ColumnNotFound,
    #[error("Task not found")]
    TaskNotFound,
    #[error("Index out of range")]
    IndexOutOfRange,
    #[error("Drop has no destination")]
    NoDestination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            Self::Applied => Ok(()),
            Self::Ignored(r) => Err(r),
        }
    }
}

/// One end of a drag gesture, as reported by the drag-and-drop layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropPosition {
    pub droppable_id: String,
    pub index: usize,
}

/// A completed drag gesture. `destination` is absent when the card was
/// dropped outside any column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropResult {
    pub source: DropPosition,
    #[serde(default)]
    pub destination: Option<DropPosition>,
}

/// Owns the board for one session and applies every state transition.
///
/// Mutations never edit the current board in place: each one builds the
/// affected columns' new task lists and swaps in a whole new `Board`.
#[derive(Debug, Clone)]
pub struct BoardManager {
    board: Board,
    explicitly_cleared: bool,
}

impl BoardManager {
    pub fn new(board: Board, explicitly_cleared: bool) -> Self {
        Self {
            board,
            explicitly_cleared,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_explicitly_cleared(&self) -> bool {
        self.explicitly_cleared
    }

    pub fn add_task(&mut self, column_id: &str, name: &str, description: &str, tags: &[Tag]) -> Outcome {
        let name = name.trim();
        if name.is_empty() {
            return Outcome::Ignored(Rejection::EmptyName);
        }
        if !validate::is_valid(tags) {
            return Outcome::Ignored(Rejection::InvalidTags);
        }
        let Some(idx) = self.board.column_index(column_id) else {
            return Outcome::Ignored(Rejection::ColumnNotFound);
        };

        let task = Task::new(next_task_id(), name, description.trim(), tags.to_vec());
        info!(column = column_id, task = %task.id, "task added");
        let mut tasks = self.board.columns[idx].tasks.clone();
        tasks.push(task);
        self.commit(vec![(idx, tasks)]);
        Outcome::Applied
    }

    pub fn edit_task(
        &mut self,
        column_id: &str,
        task_id: &str,
        name: &str,
        description: &str,
        tags: &[Tag],
    ) -> Outcome {
        let name = name.trim();
        if name.is_empty() {
            return Outcome::Ignored(Rejection::EmptyName);
        }
        if !validate::is_valid(tags) {
            return Outcome::Ignored(Rejection::InvalidTags);
        }
        let Some(idx) = self.board.column_index(column_id) else {
            return Outcome::Ignored(Rejection::ColumnNotFound);
        };
        if self.board.columns[idx].task(task_id).is_none() {
            return Outcome::Ignored(Rejection::TaskNotFound);
        }

        let tasks = self.board.columns[idx]
            .tasks
            .iter()
            .map(|t| {
                if t.id == task_id {
                    Task::new(t.id.clone(), name, description.trim(), tags.to_vec())
                } else {
                    t.clone()
                }
            })
            .collect();
        info!(column = column_id, task = task_id, "task edited");
        self.commit(vec![(idx, tasks)]);
        Outcome::Applied
    }

    pub fn delete_task(&mut self, column_id: &str, task_id: &str) -> Outcome {
        let Some(idx) = self.board.column_index(column_id) else {
            return Outcome::Ignored(Rejection::ColumnNotFound);
        };
        if self.board.columns[idx].task(task_id).is_none() {
            return Outcome::Ignored(Rejection::TaskNotFound);
        }

        let tasks = self.board.columns[idx]
            .tasks
            .iter()
            .filter(|t| t.id != task_id)
            .cloned()
            .collect();
        info!(column = column_id, task = task_id, "task deleted");
        self.commit(vec![(idx, tasks)]);
        Outcome::Applied
    }

    /// Remove the task at `source_index` and insert it at `dest_index`.
    ///
    /// When both positions are in the same column the removal happens
    /// first, so `dest_index` addresses the shortened list.
    pub fn move_task(
        &mut self,
        source_column: &str,
        source_index: usize,
        dest_column: &str,
        dest_index: usize,
    ) -> Outcome {
        let (Some(src), Some(dst)) = (
            self.board.column_index(source_column),
            self.board.column_index(dest_column),
        ) else {
            return Outcome::Ignored(Rejection::ColumnNotFound);
        };
        if source_index >= self.board.columns[src].tasks.len() {
            return Outcome::Ignored(Rejection::IndexOutOfRange);
        }

        let mut source_tasks = self.board.columns[src].tasks.clone();
        let moved = source_tasks.remove(source_index);

        let updates = if src == dst {
            if dest_index > source_tasks.len() {
                return Outcome::Ignored(Rejection::IndexOutOfRange);
            }
            source_tasks.insert(dest_index, moved);
            vec![(src, source_tasks)]
        } else {
            let mut dest_tasks = self.board.columns[dst].tasks.clone();
            if dest_index > dest_tasks.len() {
                return Outcome::Ignored(Rejection::IndexOutOfRange);
            }
            dest_tasks.insert(dest_index, moved);
            vec![(src, source_tasks), (dst, dest_tasks)]
        };

        info!(
            from = source_column,
            from_index = source_index,
            to = dest_column,
            to_index = dest_index,
            "task moved"
        );
        self.commit(updates);
        Outcome::Applied
    }

    pub fn apply_drop(&mut self, drop: &DropResult) -> Outcome {
        let Some(destination) = &drop.destination else {
            debug!("drop without destination ignored");
            return Outcome::Ignored(Rejection::NoDestination);
        };
        self.move_task(
            &drop.source.droppable_id,
            drop.source.index,
            &destination.droppable_id,
            destination.index,
        )
    }

    /// Empty every column and stop the default board from coming back for
    /// the rest of the session.
    pub fn clear_all(&mut self) -> Outcome {
        self.explicitly_cleared = true;
        let columns = self
            .board
            .columns
            .iter()
            .map(|c| c.with_tasks(Vec::new()))
            .collect();
        self.board = Board::new(columns);
        info!("board cleared");
        Outcome::Applied
    }

    /// Swap in the default board when every column is empty and the session
    /// was not cleared on purpose. Returns whether the board was replaced.
    pub fn restore_default_if_empty(&mut self) -> bool {
        if self.explicitly_cleared || !self.board.is_empty() {
            return false;
        }
        info!("all columns empty, restoring default board");
        self.board = Board::default_board();
        true
    }

    fn commit(&mut self, mut updates: Vec<(usize, Vec<Task>)>) {
        let columns = self
            .board
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| match updates.iter().position(|(idx, _)| *idx == i) {
                Some(pos) => col.with_tasks(updates.swap_remove(pos).1),
                None => col.clone(),
            })
            .collect();
        self.board = Board::new(columns);
        self.restore_default_if_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;

    fn task(id: &str) -> Task {
        Task::new(id, id, "", Vec::new())
    }

    fn ids(manager: &BoardManager, column: &str) -> Vec<String> {
        manager.board().column(column).unwrap().tasks.iter().map(|t| t.id.clone()).collect()
    }

    fn two_columns() -> BoardManager {
        BoardManager::new(
            Board::new(vec![
                Column::new("a", "A", vec![task("t1"), task("t2"), task("t3")]),
                Column::new("b", "B", Vec::new()),
            ]),
            false,
        )
    }

    #[test]
    fn test_add_appends_trimmed_task() {
        let mut m = two_columns();
        let tags = vec![Tag::new("BUG", "red")];
        assert_eq!(m.add_task("b", "  Fix it ", "  soon ", &tags), Outcome::Applied);
        let added = &m.board().column("b").unwrap().tasks[0];
        assert_eq!(added.name, "Fix it");
        assert_eq!(added.description, "soon");
        assert_eq!(added.tags, tags);
        assert!(added.id.starts_with("task-"));
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut m = two_columns();
        assert_eq!(m.add_task("a", "   ", "", &[]), Outcome::Ignored(Rejection::EmptyName));
        assert_eq!(ids(&m, "a"), ["t1", "t2", "t3"]);
    }

    #[test]
    fn test_add_rejects_duplicate_tags() {
        let mut m = two_columns();
        let tags = vec![Tag::new("Bug", "red"), Tag::new("bug", "blue")];
        assert_eq!(m.add_task("a", "x", "", &tags), Outcome::Ignored(Rejection::InvalidTags));
        assert_eq!(m.board().column("a").unwrap().tasks.len(), 3);
    }

    #[test]
    fn test_add_to_unknown_column() {
        let mut m = two_columns();
        assert_eq!(m.add_task("zz", "x", "", &[]), Outcome::Ignored(Rejection::ColumnNotFound));
    }

    #[test]
    fn test_edit_keeps_id_and_position() {
        let mut m = two_columns();
        let tags = vec![Tag::new("UI", "green")];
        assert_eq!(m.edit_task("a", "t2", " Renamed ", " d ", &tags), Outcome::Applied);
        assert_eq!(ids(&m, "a"), ["t1", "t2", "t3"]);
        let edited = m.board().column("a").unwrap().task("t2").unwrap();
        assert_eq!(edited.name, "Renamed");
        assert_eq!(edited.description, "d");
        assert_eq!(edited.tags, tags);
    }

    #[test]
    fn test_edit_validation() {
        let mut m = two_columns();
        let before = m.board().clone();
        assert_eq!(m.edit_task("a", "t1", "", "", &[]), Outcome::Ignored(Rejection::EmptyName));
        assert_eq!(
            m.edit_task("a", "t1", "n", "", &[Tag::new(" ", "red")]),
            Outcome::Ignored(Rejection::InvalidTags)
        );
        assert_eq!(m.edit_task("a", "nope", "n", "", &[]), Outcome::Ignored(Rejection::TaskNotFound));
        assert_eq!(m.board(), &before);
    }

    #[test]
    fn test_delete() {
        let mut m = two_columns();
        assert_eq!(m.delete_task("a", "t2"), Outcome::Applied);
        assert_eq!(ids(&m, "a"), ["t1", "t3"]);
        assert_eq!(m.delete_task("a", "t2"), Outcome::Ignored(Rejection::TaskNotFound));
        assert_eq!(m.delete_task("b", "t1"), Outcome::Ignored(Rejection::TaskNotFound));
    }

    #[test]
    fn test_move_between_columns() {
        let mut m = two_columns();
        assert_eq!(m.move_task("a", 0, "b", 0), Outcome::Applied);
        assert_eq!(ids(&m, "a"), ["t2", "t3"]);
        assert_eq!(ids(&m, "b"), ["t1"]);
    }

    #[test]
    fn test_move_within_column() {
        let mut m = two_columns();
        assert_eq!(m.move_task("a", 2, "a", 0), Outcome::Applied);
        assert_eq!(ids(&m, "a"), ["t3", "t1", "t2"]);

        assert_eq!(m.move_task("a", 0, "a", 2), Outcome::Applied);
        assert_eq!(ids(&m, "a"), ["t1", "t2", "t3"]);
    }

    #[test]
    fn test_move_out_of_range_is_ignored() {
        let mut m = two_columns();
        let before = m.board().clone();
        assert_eq!(m.move_task("a", 3, "b", 0), Outcome::Ignored(Rejection::IndexOutOfRange));
        assert_eq!(m.move_task("a", 0, "b", 1), Outcome::Ignored(Rejection::IndexOutOfRange));
        assert_eq!(m.move_task("a", 0, "a", 3), Outcome::Ignored(Rejection::IndexOutOfRange));
        assert_eq!(m.move_task("a", 0, "zz", 0), Outcome::Ignored(Rejection::ColumnNotFound));
        assert_eq!(m.board(), &before);
    }

    #[test]
    fn test_drop_without_destination() {
        let mut m = two_columns();
        let drop = DropResult {
            source: DropPosition { droppable_id: "a".into(), index: 0 },
            destination: None,
        };
        assert_eq!(m.apply_drop(&drop), Outcome::Ignored(Rejection::NoDestination));
        assert_eq!(ids(&m, "a"), ["t1", "t2", "t3"]);
    }

    #[test]
    fn test_drop_result_wire_format() {
        let drop: DropResult = serde_json::from_str(
            r#"{"source":{"droppableId":"a","index":1},"destination":{"droppableId":"b","index":0}}"#,
        )
        .unwrap();
        let mut m = two_columns();
        assert_eq!(m.apply_drop(&drop), Outcome::Applied);
        assert_eq!(ids(&m, "b"), ["t2"]);
    }

    #[test]
    fn test_deleting_everything_restores_default() {
        let mut m = two_columns();
        for id in ["t1", "t2", "t3"] {
            assert!(m.delete_task("a", id).is_applied());
        }
        assert_eq!(m.board(), &Board::default_board());
    }

    #[test]
    fn test_clear_all_suppresses_restore() {
        let mut m = two_columns();
        assert_eq!(m.clear_all(), Outcome::Applied);
        assert!(m.is_explicitly_cleared());
        assert!(m.board().is_empty());
        assert_eq!(m.board().columns.len(), 2);
        assert!(!m.restore_default_if_empty());

        assert!(m.add_task("a", "again", "", &[]).is_applied());
        let id = m.board().column("a").unwrap().tasks[0].id.clone();
        assert!(m.delete_task("a", &id).is_applied());
        assert!(m.board().is_empty());
    }

    #[test]
    fn test_every_task_stays_in_exactly_one_column() {
        let mut m = two_columns();
        m.move_task("a", 1, "b", 0);
        m.move_task("b", 0, "a", 2);
        m.move_task("a", 0, "b", 0);
        let mut all: Vec<String> = m.board().columns.iter().flat_map(|c| c.tasks.iter().map(|t| t.id.clone())).collect();
        all.sort();
        assert_eq!(all, ["t1", "t2", "t3"]);
    }
}
