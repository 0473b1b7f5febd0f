//! Error kinds reported by sequence pipelines.
//!
//! Every failure is raised synchronously at the call that caused it. Nothing is
//! retried; the caller decides whether to abort or recover (for example by
//! adding a `limit` before retrying a `sorted_by` that was rejected).

use crate::seq_id::SeqId;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = SeqError> = std::result::Result<T, E>;

/// Errors produced by [`Seq`](crate::Seq) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// The pipeline was already consumed by a terminal operation or derived
    /// into another pipeline.
    #[error("pipeline {id} has already been consumed")]
    AlreadyConsumed {
        /// Pipeline that was reused.
        id: SeqId,
    },

    /// An operation that must see every element was applied to an infinite
    /// source that has no preceding `limit`.
    #[error("`{op}` requires a bounded sequence; apply `limit` first")]
    UnboundedSource {
        /// Name of the rejected operation.
        op: &'static str,
    },

    /// An extremum was requested from a sequence with no elements.
    #[error("`{op}` called on an empty sequence")]
    EmptySequence {
        /// Name of the operation that needed at least one element.
        op: &'static str,
    },

    /// A count argument was negative.
    #[error("`{op}` expects a non-negative count, got {value}")]
    InvalidArgument {
        /// Name of the rejected operation.
        op: &'static str,
        /// The offending value.
        value: i64,
    },
}
