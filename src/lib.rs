//! Questline - a command-line client for Habitica-compatible task trackers
//!
//! Questline turns CLI invocations into authenticated requests against
//! the service's v3 REST API and renders the JSON responses as text:
//! listing, adding, editing, scoring, and moving habits, dailies, and
//! todos; managing tags; and showing an account status panel with party
//! and quest progress.
//!
//! # Architecture
//!
//! The codebase is layered:
//!
//! - [`cli`] - Argument parsing, config loading, command dispatch
//! - [`ops`] - Bulk operations against per-invocation snapshots
//! - [`api`] - Request building and authenticated HTTP execution
//! - [`core`] - Domain types, selection parsing, config, quest cache
//! - [`ui`] - Output helpers and listing/status rendering
//!
//! # Invariants
//!
//! 1. Index selections resolve against the snapshot fetched in the same
//!    invocation; nothing is cached across invocations except quest
//!    metadata.
//! 2. Requests are sequential and never retried; the first failure in a
//!    bulk operation aborts the rest.
//! 3. Control data (method, score direction, move position, entity id)
//!    shapes the request URL and never reaches the payload.

pub mod api;
pub mod cli;
pub mod core;
pub mod ops;
pub mod ui;
