//! api
//!
//! HTTP surface for the task-tracking service.
//!
//! # Architecture
//!
//! [`request`] builds a concrete method + URL + payload from a resource,
//! an optional aspect, and incremental fields - pure, no I/O. [`client`]
//! executes built requests against the service with the account's auth
//! headers attached.
//!
//! # Example
//!
//! ```ignore
//! use questline::api::{ApiClient, Direction, RequestSpec};
//! use reqwest::Method;
//!
//! let client = ApiClient::new("https://habitica.com", "user-id", "api-key");
//! let data = client
//!     .send(
//!         RequestSpec::new("user")
//!             .aspect("tasks")
//!             .id("task-id")
//!             .method(Method::POST)
//!             .direction(Direction::Up),
//!     )
//!     .await?;
//! ```

pub mod client;
pub mod request;

pub use client::{ApiClient, ApiError};
pub use request::{BuiltRequest, Direction, RequestSpec, API_PATH};
