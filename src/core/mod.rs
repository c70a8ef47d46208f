//! core
//!
//! Domain types and invocation-local state for questline.
//!
//! # Modules
//!
//! - [`types`] - Task, tag, and task-kind types shared across layers
//! - [`select`] - Index/range/name selection parsing
//! - [`fields`] - CLI flag to API field normalization
//! - [`config`] - Credential and preference loading
//! - [`cache`] - Persisted quest metadata

pub mod cache;
pub mod config;
pub mod fields;
pub mod select;
pub mod types;
