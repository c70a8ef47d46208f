//! Task family commands - list, add, edit, delete, score, and move.
//!
//! Every mutating action re-fetches and prints the listing afterwards,
//! so the ordinals on screen always match what the next selection will
//! resolve against.

use anyhow::{anyhow, Result};
use serde_json::Map;

use super::{runtime, Context};
use crate::api::{ApiClient, Direction};
use crate::cli::args::TaskAction;
use crate::core::fields::from_flags;
use crate::core::select::parse_index_list;
use crate::core::types::TaskKind;
use crate::ops::tasks::{add_task, bulk_edit, fetch_tasks, move_tasks, BulkAction};
use crate::ui::{output, render};

/// Run one task-family action.
pub fn tasks(ctx: &Context, kind: TaskKind, action: &TaskAction) -> Result<()> {
    let rt = runtime()?;
    let client = ctx.client();

    rt.block_on(async {
        match action {
            TaskAction::List => {}

            TaskAction::Add { fields } => {
                let mapped = from_flags(&fields.to_flags());
                if !mapped.contains_key("text") {
                    return Err(anyhow!("a new {} needs --text", kind));
                }
                add_task(&client, kind, mapped).await?;
            }

            TaskAction::Edit { ids, fields } => {
                let indices = parse_index_list(ids)?;
                output::debug(format!("selected indices: {:?}", indices), ctx.verbosity);
                let snapshot = fetch_tasks(&client, kind).await?;
                let updates = from_flags(&fields.to_flags());
                bulk_edit(&client, BulkAction::Edit, &snapshot, &indices, &updates).await?;
            }

            TaskAction::Delete { ids } => {
                let indices = parse_index_list(ids)?;
                let snapshot = fetch_tasks(&client, kind).await?;
                bulk_edit(&client, BulkAction::Delete, &snapshot, &indices, &Map::new()).await?;
            }

            TaskAction::Move { ids, position } => {
                let target = position
                    .checked_sub(1)
                    .ok_or_else(|| anyhow!("positions are numbered from 1"))?;
                let indices = parse_index_list(ids)?;
                let snapshot = fetch_tasks(&client, kind).await?;
                move_tasks(&client, &snapshot, &indices, target).await?;
            }
        }

        relist(&client, ctx, kind).await
    })
}

/// Score the selected tasks in one direction: habit +/-, or checking
/// and unchecking dailies and todos.
pub fn score(ctx: &Context, kind: TaskKind, ids: &str, direction: Direction) -> Result<()> {
    let rt = runtime()?;
    let client = ctx.client();

    rt.block_on(async {
        let indices = parse_index_list(ids)?;
        output::debug(format!("selected indices: {:?}", indices), ctx.verbosity);
        let snapshot = fetch_tasks(&client, kind).await?;
        let action = match direction {
            Direction::Up => BulkAction::Up,
            Direction::Down => BulkAction::Down,
        };
        bulk_edit(&client, action, &snapshot, &indices, &Map::new()).await?;
        relist(&client, ctx, kind).await
    })
}

/// Print the fresh listing after an action, so on-screen ordinals match
/// what the next selection will resolve against.
async fn relist(client: &ApiClient, ctx: &Context, kind: TaskKind) -> Result<()> {
    let tasks = fetch_tasks(client, kind).await?;
    if !tasks.is_empty() {
        output::print(render::render_tasks(&tasks, ctx.checklists), ctx.verbosity);
    }
    Ok(())
}
