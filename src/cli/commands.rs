use clap::{ArgAction, Parser, Subcommand};

const VERSION: &str = env!("TASKBOARD_VERSION");

#[derive(Parser)]
#[command(
    name = "taskboard",
    version = VERSION,
    about = "Local Kanban board for the current repository",
    after_help = "\
NOTE:
  Requires a git repository. The board is stored at <git-root>/.worktoolai/taskboard/taskboard.db
  Run `taskboard init` before any other command.

COLUMNS:
  Fixed: `column-1` To Do, `column-2` In Progress, `column-3` Completed.
  Columns may be named by id or by title (any case). Tasks by id or unique id prefix.

EXIT CODES:
  0  Success
  1  Error, or the change was refused (empty name, duplicate tags, bad index, ...)

BOARD RULES:
  Deleting the last task on the board brings back the sample board.
  `clear` empties the board and keeps it empty until `reset`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log more (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize taskboard in this repository
    Init,

    /// Show the board
    Show,

    /// Task management
    #[command(subcommand)]
    Task(TaskCommands),

    /// Delete every task and keep the board empty
    Clear,

    /// List the distinct tags in use
    Legend,

    /// Restore the sample board and start a new session
    Reset,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task to the end of a column
    Add {
        /// Column id or title
        column: String,
        /// Task name
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Tag as NAME or NAME:COLOR (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Edit a task in place (omitted fields keep their values)
    Edit {
        column: String,
        /// Task id or prefix
        task: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Replace the tags with these (repeatable)
        #[arg(long = "tag", conflicts_with = "clear_tags")]
        tags: Vec<String>,
        /// Remove all tags
        #[arg(long)]
        clear_tags: bool,
    },
    /// Show task details
    Show {
        column: String,
        /// Task id or prefix
        task: String,
    },
    /// Delete a task
    Delete {
        column: String,
        /// Task id or prefix
        task: String,
    },
    /// Move a task by position (zero-based, remove then insert)
    Move {
        source: String,
        source_index: usize,
        destination: String,
        dest_index: usize,
    },
    /// Apply a drag-and-drop result read from stdin
    #[command(after_help = "\
STDIN FORMAT:
  {\"source\":{\"droppableId\":\"column-1\",\"index\":0},
   \"destination\":{\"droppableId\":\"column-2\",\"index\":0}}

NOTE:
  A null or missing destination is a no-op (the card was dropped outside the board).")]
    Drop,
}
