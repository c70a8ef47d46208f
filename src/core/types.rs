//! core::types
//!
//! Task and tag snapshot types.
//!
//! # Ownership
//!
//! Tasks and tags are owned by the remote service. The client fetches an
//! ephemeral snapshot per invocation, resolves user selections against
//! it, and sends whole objects back for updates. Server fields we do not
//! model are retained through `#[serde(flatten)]` so that updates
//! round-trip the complete object.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The three task kinds the service models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Habit,
    Daily,
    Todo,
}

impl TaskKind {
    /// The API word used when creating or describing a single task.
    pub fn singular(self) -> &'static str {
        match self {
            TaskKind::Habit => "habit",
            TaskKind::Daily => "daily",
            TaskKind::Todo => "todo",
        }
    }

    /// The API word used when listing tasks of this kind.
    ///
    /// The service spells the daily plural `dailys`.
    pub fn plural(self) -> &'static str {
        match self {
            TaskKind::Habit => "habits",
            TaskKind::Daily => "dailys",
            TaskKind::Todo => "todos",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// One checklist item on a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// A task snapshot as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    /// Habits carry no completion flag; it defaults to false.
    #[serde(default)]
    pub completed: bool,
    #[serde(default = "default_priority")]
    pub priority: f64,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Every other server field, carried through untouched.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

fn default_priority() -> f64 {
    1.0
}

impl Task {
    /// The full task as an API field map, id included.
    pub fn to_fields(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Completed checklist items out of the total.
    pub fn checklist_done(&self) -> usize {
        self.checklist.iter().filter(|item| item.completed).count()
    }
}

/// A tag snapshot as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Tag {
    /// The full tag as an API field map, id included.
    pub fn to_fields(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
