use clap::{Parser, Subcommand};

use crate::model::TaskId;
use crate::store::DISPLAY_LIMIT;

#[derive(Parser)]
#[command(name = "tasksched", about = "Task scheduler backed by a spreadsheet-style task sheet")]
pub struct Cli {
    /// Path to the task sheet [default: tasks.csv in the working directory]
    #[arg(long, env = "TASKSCHED_SHEET", global = true)]
    pub sheet: Option<String>,

    /// Running without a subcommand launches the interactive UI
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a task
    Add {
        /// Task description
        description: String,
    },

    /// Set a task's status
    Status {
        /// Task id
        id: TaskId,
        /// New status (not-started, under-process, completed)
        status: String,
    },

    /// Set a task's notes
    Note {
        /// Task id
        id: TaskId,
        /// Notes text; an empty string clears, omit to read from stdin
        notes: Option<String>,
    },

    /// Delete a task
    Rm {
        /// Task id
        id: TaskId,
    },

    /// Show one task in detail
    Show {
        /// Task id
        id: TaskId,
    },

    /// List tasks
    List {
        /// Maximum rows to show
        #[arg(long, default_value_t = DISPLAY_LIMIT)]
        limit: usize,
        /// Show the newest rows instead of the oldest
        #[arg(long)]
        newest: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Launch the interactive UI
    Ui,
}
