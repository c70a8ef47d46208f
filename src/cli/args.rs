//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! Available on all commands:
//! - `--config <path>`: Use an alternate config file (e.g. a test account)
//! - `--debug`: Enable debug output
//! - `--quiet` / `-q`: Minimal output
//! - `--checklists` / `-c`: Toggle checklist display for this invocation

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::core::fields::{Difficulty, TaskFlags};

/// Questline - a command-line client for Habitica-compatible task trackers
#[derive(Parser, Debug)]
#[command(name = "ql")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Toggle checklist display on or off for this invocation
    #[arg(short = 'c', long, global = true)]
    pub checklists: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Work with habits
    Habits {
        #[command(subcommand)]
        action: HabitAction,
    },

    /// Work with daily tasks
    Dailies {
        #[command(subcommand)]
        action: CompletableAction,
    },

    /// Work with todos
    Todos {
        #[command(subcommand)]
        action: CompletableAction,
    },

    /// Work with tags
    Tags {
        #[command(subcommand)]
        action: TagAction,
    },

    /// Show HP, XP, party, quest, and more
    Status,

    /// Check whether the service is up
    Server,

    /// Open the service's task page in a browser
    Home,

    /// Delete all of the account's tasks
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Actions available on every task family.
///
/// Selections (`<IDS>`) are comma-separated 1-based indices and ranges
/// into the most recent listing, e.g. `1,3,6-9`.
#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// List tasks of this kind
    List,

    /// Add a new task
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Change fields on the selected tasks
    Edit {
        /// Task selection, e.g. `1,3,6-9`
        ids: String,
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete the selected tasks
    Delete {
        /// Task selection, e.g. `1,3,6-9`
        ids: String,
    },

    /// Move the selected tasks to a new position, keeping their order
    Move {
        /// Task selection, e.g. `1,4-5`
        ids: String,
        /// 1-based destination position
        position: usize,
    },
}

/// Actions on habits. Habits have no completion state, so they are
/// scored with `up`/`down` rather than checked off.
#[derive(Subcommand, Debug)]
pub enum HabitAction {
    /// Score the selected habits up (+)
    Up {
        /// Task selection, e.g. `1,3,6-9`
        ids: String,
    },

    /// Score the selected habits down (-)
    Down {
        /// Task selection, e.g. `1,3,6-9`
        ids: String,
    },

    #[command(flatten)]
    Task(TaskAction),
}

/// Actions on dailies and todos, which can be completed and unchecked.
#[derive(Subcommand, Debug)]
pub enum CompletableAction {
    /// Complete the selected tasks
    Done {
        /// Task selection, e.g. `1,3,6-9`
        ids: String,
    },

    /// Uncheck the selected tasks
    Undo {
        /// Task selection, e.g. `1,3,6-9`
        ids: String,
    },

    #[command(flatten)]
    Task(TaskAction),
}

/// Actions on the account's tags.
#[derive(Subcommand, Debug)]
pub enum TagAction {
    /// List tags
    List,

    /// Add a new tag
    Add {
        /// Name of the new tag
        #[arg(long)]
        text: String,
    },

    /// Delete the selected tags
    Delete {
        /// Tag selection: indices (`1,3`) or names (`Work,School`)
        ids: String,
    },

    /// Rename a single tag
    #[command(visible_alias = "edit")]
    Rename {
        /// Tag selection: an index or a name matching exactly one tag
        ids: String,
        /// New name for the tag
        #[arg(long)]
        text: String,
    },
}

/// Task field flags shared by `add` and `edit`.
#[derive(clap::Args, Debug, Clone)]
pub struct FieldArgs {
    /// Quoted string holding the name of the task
    #[arg(long)]
    pub text: Option<String>,

    /// Quoted string holding the task's notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Collapse the task's checklist on the web client
    #[arg(long, value_name = "BOOL")]
    pub checklist: Option<bool>,

    /// Task difficulty: easy, medium, or hard
    #[arg(long, value_parser = Difficulty::parse_arg)]
    pub difficulty: Option<Difficulty>,

    /// Due date, given as YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

impl FieldArgs {
    /// Convert clap-collected flags into the normalizer's input.
    pub fn to_flags(&self) -> TaskFlags {
        TaskFlags {
            text: self.text.clone(),
            notes: self.notes.clone(),
            checklist: self.checklist,
            difficulty: self.difficulty,
            date: self.date,
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("'{}' is not a date in YYYY-MM-DD form", raw))
}

/// Shells we can generate completions for.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
