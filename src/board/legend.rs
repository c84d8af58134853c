use std::collections::HashSet;

use crate::models::{Board, Tag};

/// Distinct `(name, color)` pairs used anywhere on the board. Two tags with
/// the same name but different colors are both listed.
pub fn tag_legend(board: &Board) -> Vec<Tag> {
    let mut seen = HashSet::new();
    let mut legend = Vec::new();
    for tag in board.columns.iter().flat_map(|c| &c.tasks).flat_map(|t| &t.tags) {
        if seen.insert((tag.name.as_str(), tag.color.as_str())) {
            legend.push(tag.clone());
        }
    }
    legend
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, Task};

    fn sorted(mut tags: Vec<Tag>) -> Vec<(String, String)> {
        tags.sort_by(|a, b| (&a.name, &a.color).cmp(&(&b.name, &b.color)));
        tags.into_iter().map(|t| (t.name, t.color)).collect()
    }

    #[test]
    fn test_default_board_legend() {
        let legend = sorted(tag_legend(&Board::default_board()));
        let expected: Vec<(String, String)> = [
            ("BUG", "red"),
            ("CODE", "brown"),
            ("DOC", "blue"),
            ("INIT", "purple"),
            ("OPS", "orange"),
            ("UI", "green"),
        ]
        .iter()
        .map(|(n, c)| (n.to_string(), c.to_string()))
        .collect();
        assert_eq!(legend, expected);
    }

    #[test]
    fn test_pairs_not_names_are_deduplicated() {
        let board = Board::new(vec![
            Column::new("a", "A", vec![Task::new("1", "x", "", vec![Tag::new("UI", "green")])]),
            Column::new("b", "B", vec![Task::new("2", "y", "", vec![Tag::new("UI", "red"), Tag::new("UI", "green")])]),
        ]);
        assert_eq!(tag_legend(&board).len(), 2);
    }

    #[test]
    fn test_empty_board_has_no_legend() {
        let board = Board::new(vec![Column::new("a", "A", Vec::new())]);
        assert!(tag_legend(&board).is_empty());
    }
}
