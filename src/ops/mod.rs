//! ops
//!
//! Operations against snapshots of remote state.
//!
//! # Design
//!
//! Each bulk operation fetches (or is handed) a snapshot of the user's
//! tasks or tags, resolves the selection against it, and issues one
//! sequential request per resolved item. A failure aborts the remaining
//! items; there is no rollback and no partial-failure recovery.

pub mod status;
pub mod tags;
pub mod tasks;

use thiserror::Error;

use crate::api::ApiError;

/// Errors from snapshot operations.
#[derive(Debug, Error)]
pub enum OpsError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Cache(#[from] crate::core::cache::CacheError),

    #[error("no entry {ordinal} in the current listing of {len}")]
    BadIndex {
        /// 1-based position as the user typed it
        ordinal: usize,
        len: usize,
    },

    #[error("cannot rename multiple tags at once")]
    AmbiguousRename,

    #[error("no tag matched the given selection")]
    NoTagMatched,
}

impl OpsError {
    /// Build a BadIndex error from a zero-based index.
    fn bad_index(index: usize, len: usize) -> OpsError {
        OpsError::BadIndex {
            ordinal: index + 1,
            len,
        }
    }
}
