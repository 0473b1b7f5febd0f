use crate::error::{Result, SeqError};
use crate::node::{Bound, Stage};
use crate::seq_id::SeqId;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::warn;

/// What a pipeline cell currently holds.
pub(crate) enum Slot<T> {
    Ready(Stage<T>),
    Consumed,
    /// Built on top of a handle that was already consumed; replayed on every
    /// terminal call.
    Failed(SeqError),
}

/// -------- Single-use pipeline cell --------
/// Shared by every clone of a [`Seq`](crate::Seq) handle. Taking the stage out
/// flips the slot to `Consumed`, so exactly one operation ever drives it.
pub struct Pipeline<T> {
    pub(crate) inner: Arc<Mutex<PipelineInner<T>>>,
}

pub(crate) struct PipelineInner<T> {
    pub id: SeqId,
    pub label: Option<String>,
    pub slot: Slot<T>,
}

/// Clones share the same slot.
impl<T> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Pipeline {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Pipeline<T> {
    pub(crate) fn new(stage: Stage<T>, label: Option<String>) -> Self {
        Self::with_slot(Slot::Ready(stage), label)
    }

    pub(crate) fn failed(err: SeqError, label: Option<String>) -> Self {
        Self::with_slot(Slot::Failed(err), label)
    }

    fn with_slot(slot: Slot<T>, label: Option<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PipelineInner {
                id: SeqId::next(),
                label,
                slot,
            })),
        }
    }

    // Closures never run under this lock, so a poisoned mutex still holds a
    // consistent slot.
    fn lock(&self) -> MutexGuard<'_, PipelineInner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn id(&self) -> SeqId {
        self.lock().id
    }

    pub fn label(&self) -> Option<String> {
        self.lock().label.clone()
    }

    pub(crate) fn set_label(&self, label: String) {
        self.lock().label = Some(label);
    }

    pub fn is_consumed(&self) -> bool {
        !matches!(self.lock().slot, Slot::Ready(_))
    }

    /// Take the stage out, leaving the cell consumed.
    pub(crate) fn take(&self, op: &'static str) -> Result<Stage<T>> {
        let mut g = self.lock();
        take_slot(&mut g, op)
    }

    /// Like [`take`](Self::take), but refuse an unbounded stage. A refused stage
    /// stays in the cell so the caller can still `limit` it.
    pub(crate) fn take_finite(&self, op: &'static str) -> Result<Stage<T>> {
        let mut g = self.lock();
        if let Slot::Ready(stage) = &g.slot {
            if stage.bound == Bound::Unbounded {
                warn!(seq = %g.id, op, "rejected eager operation on unbounded source");
                return Err(SeqError::UnboundedSource { op });
            }
        }
        take_slot(&mut g, op)
    }

    /// Render the pending step chain without consuming anything.
    pub(crate) fn describe(&self) -> Result<String> {
        let g = self.lock();
        match &g.slot {
            Slot::Ready(stage) => Ok(match &g.label {
                Some(label) => format!("[{label}] {}", stage.describe()),
                None => stage.describe(),
            }),
            Slot::Consumed => Err(SeqError::AlreadyConsumed { id: g.id }),
            Slot::Failed(e) => Err(e.clone()),
        }
    }
}

fn take_slot<T>(g: &mut PipelineInner<T>, op: &'static str) -> Result<Stage<T>> {
    match std::mem::replace(&mut g.slot, Slot::Consumed) {
        Slot::Ready(stage) => Ok(stage),
        Slot::Consumed => {
            warn!(seq = %g.id, op, "pipeline reused after consumption");
            Err(SeqError::AlreadyConsumed { id: g.id })
        }
        Slot::Failed(e) => {
            warn!(seq = %g.id, op, error = %e, "operation on failed pipeline");
            g.slot = Slot::Failed(e.clone());
            Err(e)
        }
    }
}
