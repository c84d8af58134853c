use chrono::{DateTime, Local, Utc};

use crate::models::{Board, Tag, Task};

fn tag_label(tag: &Tag) -> String {
    format!("#{}({})", tag.name, tag.color)
}

fn tags_inline(tags: &[Tag]) -> String {
    tags.iter().map(tag_label).collect::<Vec<_>>().join(" ")
}

pub fn print_board(board: &Board, saved_at: Option<DateTime<Utc>>) {
    for (i, column) in board.columns.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} [{}] ({})", column.title, column.id, column.tasks.len());
        if column.tasks.is_empty() {
            println!("  (empty)");
        }
        for (idx, t) in column.tasks.iter().enumerate() {
            let tags = tags_inline(&t.tags);
            println!(
                "  {idx}. {} ({}){}",
                t.name,
                t.id,
                if tags.is_empty() { String::new() } else { format!(" {tags}") }
            );
        }
    }
    if let Some(saved) = saved_at {
        println!("\nLast saved: {}", saved.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"));
    }
}

pub fn print_task(t: &Task) {
    println!("Task: {} ({})", t.name, t.id);
    if !t.description.is_empty() {
        println!("  Description: {}", t.description);
    }
    if !t.tags.is_empty() {
        println!("  Tags: {}", tags_inline(&t.tags));
    }
}

pub fn print_legend(legend: &[Tag]) {
    if legend.is_empty() {
        println!("No tags on the board.");
        return;
    }
    for tag in legend {
        println!("  {} {}", tag.color, tag.name);
    }
}
