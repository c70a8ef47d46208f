//! ops::tasks
//!
//! Fetching and bulk-manipulating the user's tasks.
//!
//! All task actions operate on a snapshot fetched in the same
//! invocation: user-typed indices mean "the Nth line of the listing I
//! just saw", so every bulk function takes the snapshot it should
//! resolve against.

use std::collections::BTreeSet;

use reqwest::Method;
use serde_json::{Map, Value};

use super::OpsError;
use crate::api::{ApiClient, Direction, RequestSpec};
use crate::core::fields::merge_fields;
use crate::core::types::{Task, TaskKind};

/// What a bulk edit does to each resolved task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    /// Delete the task.
    Delete,
    /// Score the task up (complete a todo/daily, + a habit).
    Up,
    /// Score the task down (uncheck a todo/daily, - a habit).
    Down,
    /// Merge field updates into the task and save it.
    Edit,
}

/// Fetch the current snapshot of tasks of one kind.
pub async fn fetch_tasks(client: &ApiClient, kind: TaskKind) -> Result<Vec<Task>, OpsError> {
    let data = client
        .send(
            RequestSpec::new("user")
                .aspect("tasks")
                .field("type", kind.plural()),
        )
        .await?;
    Ok(serde_json::from_value(data)?)
}

/// Create a new task. `fields` comes from the normalized CLI flags and
/// must include `text`.
pub async fn add_task(
    client: &ApiClient,
    kind: TaskKind,
    fields: Map<String, Value>,
) -> Result<(), OpsError> {
    let mut task_fields = Map::new();
    task_fields.insert("type".to_string(), Value::from(kind.singular()));
    merge_fields(&mut task_fields, &fields);

    client
        .send(
            RequestSpec::new("user")
                .aspect("tasks")
                .method(Method::POST)
                .fields(task_fields),
        )
        .await?;
    Ok(())
}

/// Apply `action` to every selected task, one request per task in
/// ascending index order. The first failure aborts the rest.
pub async fn bulk_edit(
    client: &ApiClient,
    action: BulkAction,
    snapshot: &[Task],
    indices: &BTreeSet<usize>,
    updates: &Map<String, Value>,
) -> Result<(), OpsError> {
    for &index in indices {
        let task = snapshot
            .get(index)
            .ok_or_else(|| OpsError::bad_index(index, snapshot.len()))?;
        let mut fields = task.to_fields();

        let spec = RequestSpec::new("user").aspect("tasks");
        let spec = match action {
            BulkAction::Delete => spec.method(Method::DELETE),
            BulkAction::Up => spec.method(Method::POST).direction(Direction::Up),
            BulkAction::Down => spec.method(Method::POST).direction(Direction::Down),
            BulkAction::Edit => {
                merge_fields(&mut fields, updates);
                spec.method(Method::PUT)
            }
        };

        client.send(spec.fields(fields)).await?;
    }
    Ok(())
}

/// Move the selected tasks to a zero-based target position.
///
/// Indices are processed in reverse resolution order so the moved items
/// keep their relative order at the destination: each task lands at the
/// target position on top of the one moved before it.
pub async fn move_tasks(
    client: &ApiClient,
    snapshot: &[Task],
    indices: &BTreeSet<usize>,
    position: usize,
) -> Result<(), OpsError> {
    for &index in indices.iter().rev() {
        let task = snapshot
            .get(index)
            .ok_or_else(|| OpsError::bad_index(index, snapshot.len()))?;
        client
            .send(
                RequestSpec::new("user")
                    .aspect("tasks")
                    .method(Method::POST)
                    .position(position)
                    .fields(task.to_fields()),
            )
            .await?;
    }
    Ok(())
}
