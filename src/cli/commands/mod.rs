//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each handler validates its arguments, runs the needed API calls, and
//! prints the result. Handlers are synchronous; the ones that talk to
//! the service build a current-thread tokio runtime and `block_on` the
//! async API work, so every invocation stays single-threaded with
//! strictly sequential requests.

mod completion;
mod home;
mod reset;
mod server;
mod status;
mod tags;
mod tasks;

pub use completion::completion;
pub use home::home;
pub use reset::reset;
pub use server::server;
pub use status::status;
pub use tags::tags;
pub use tasks::{score, tasks};

use anyhow::{Context as _, Result};
use tokio::runtime::Runtime;

use super::Context;
use crate::api::Direction;
use crate::cli::args::{Command, CompletableAction, HabitAction};
use crate::core::types::TaskKind;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Habits { action } => match action {
            HabitAction::Up { ids } => score(ctx, TaskKind::Habit, &ids, Direction::Up),
            HabitAction::Down { ids } => score(ctx, TaskKind::Habit, &ids, Direction::Down),
            HabitAction::Task(action) => tasks(ctx, TaskKind::Habit, &action),
        },
        Command::Dailies { action } => completable(ctx, TaskKind::Daily, action),
        Command::Todos { action } => completable(ctx, TaskKind::Todo, action),
        Command::Tags { action } => tags(ctx, &action),
        Command::Status => status(ctx),
        Command::Server => server(ctx),
        Command::Home => home(ctx),
        Command::Reset { force } => reset(ctx, force),
        Command::Completion { shell } => completion(shell),
    }
}

/// Route a daily/todo action: done and undo score, the rest is shared.
fn completable(ctx: &Context, kind: TaskKind, action: CompletableAction) -> Result<()> {
    match action {
        CompletableAction::Done { ids } => score(ctx, kind, &ids, Direction::Up),
        CompletableAction::Undo { ids } => score(ctx, kind, &ids, Direction::Down),
        CompletableAction::Task(action) => tasks(ctx, kind, &action),
    }
}

/// Build the single-threaded runtime used to drive API calls.
fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build async runtime")
}
