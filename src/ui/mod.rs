//! ui
//!
//! Terminal output for questline.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware message helpers
//! - [`render`] - Task, tag, and status panel formatting

pub mod output;
pub mod render;
