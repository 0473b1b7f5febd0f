//! Lightweight unique identifier for pipelines.
//!
//! Every [`Seq`](crate::Seq) gets a fresh `SeqId` when it is created, including
//! the pipelines derived from it by intermediate operations. Ids show up in
//! [`SeqError::AlreadyConsumed`](crate::SeqError::AlreadyConsumed) and in log
//! events so a reused handle can be traced back to where it was built.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque, process-unique pipeline identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SeqId(u64);

impl SeqId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Return the underlying numeric value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SeqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seq#{}", self.0)
    }
}
