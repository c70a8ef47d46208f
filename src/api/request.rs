//! api::request
//!
//! Request construction for the service's v3 REST API.
//!
//! # Design
//!
//! A [`RequestSpec`] is built incrementally and consumed once by
//! [`RequestSpec::build`], which applies the URL decision table below.
//! Direction, position, and entity id are control data: they shape the
//! URL and never appear in the payload.
//!
//! # URL decision table
//!
//! With `api_base = <base>/api/v3`, in priority order:
//!
//! 1. entity id present: `api_base/<aspect>/<id>`, then
//!    - direction present: append `/score/<up|down>`
//!    - else position present: append `/move/to/<position>`
//! 2. aspect present:
//!    - aspect `tasks`: `api_base/tasks/<resource>` (task listings hang
//!      off the owner, e.g. `tasks/user`)
//!    - aspect `tags`: `api_base/tags` (tags are global to the account;
//!      the resource segment is dropped)
//!    - otherwise: `api_base/<resource>/<aspect>`
//! 3. neither: `api_base/<resource>`
//!
//! Bulk operations send whole fetched objects back, so when no explicit
//! id was set the builder extracts one from the payload under `_id`,
//! then `id`, removing the matched key.

use std::fmt;

use reqwest::Method;
use serde_json::{Map, Value};

/// Fixed API version segment appended to the configured base URL.
pub const API_PATH: &str = "api/v3";

/// Direction in which to score a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An API request under construction. Built incrementally, consumed once.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    resource: String,
    aspect: Option<String>,
    id: Option<String>,
    method: Method,
    direction: Option<Direction>,
    position: Option<usize>,
    fields: Map<String, Value>,
}

/// A fully resolved request, ready for execution.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltRequest {
    pub method: Method,
    pub url: String,
    pub payload: Map<String, Value>,
}

impl RequestSpec {
    /// Start a request against `resource`. The method defaults to GET.
    pub fn new(resource: impl Into<String>) -> Self {
        RequestSpec {
            resource: resource.into(),
            aspect: None,
            id: None,
            method: Method::GET,
            direction: None,
            position: None,
            fields: Map::new(),
        }
    }

    /// Qualify the resource with a sub-resource aspect.
    pub fn aspect(mut self, aspect: impl Into<String>) -> Self {
        self.aspect = Some(aspect.into());
        self
    }

    /// Address a specific entity by id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Override the HTTP method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Score the addressed task up or down.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Move the addressed task to a zero-based list position.
    pub fn position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Add one payload field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Merge a map of payload fields.
    pub fn fields(mut self, fields: Map<String, Value>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Resolve the spec into a concrete method, URL, and payload.
    pub fn build(mut self, api_base: &str) -> BuiltRequest {
        let id = self.id.take().or_else(|| take_id(&mut self.fields));

        let url = match (self.aspect.as_deref(), id) {
            (Some(aspect), Some(id)) => {
                let mut url = format!("{}/{}/{}", api_base, aspect, id);
                if let Some(direction) = self.direction {
                    url.push_str(&format!("/score/{}", direction));
                } else if let Some(position) = self.position {
                    url.push_str(&format!("/move/to/{}", position));
                }
                url
            }
            (Some("tasks"), None) => format!("{}/tasks/{}", api_base, self.resource),
            (Some("tags"), None) => format!("{}/tags", api_base),
            (Some(aspect), None) => format!("{}/{}/{}", api_base, self.resource, aspect),
            (None, _) => format!("{}/{}", api_base, self.resource),
        };

        BuiltRequest {
            method: self.method,
            url,
            payload: self.fields,
        }
    }
}

/// Pull an entity id out of a payload map, trying `_id` before `id`.
/// Only the matched key is removed.
fn take_id(fields: &mut Map<String, Value>) -> Option<String> {
    for key in ["_id", "id"] {
        if let Some(value) = fields.remove(key) {
            return Some(match value {
                Value::String(s) => s,
                other => other.to_string(),
            });
        }
    }
    None
}
