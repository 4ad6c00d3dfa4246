//! Change notification
//!
//! A list screen hands its reload callback to the form flow; the engine
//! fires it exactly once after a successful persist, before the mutation
//! returns. A hook may be absent, in which case firing is a no-op — the
//! mutation's return value already carries everything a caller needs to
//! reconcile its held collection without a callback.

use std::fmt;
use std::sync::Arc;

use crate::record::{EntityKind, RecordId};

/// What a mutation did to a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Created(RecordId),
    Updated(RecordId),
    Deleted(RecordId),
}

/// Outcome of one reconciliation pass, emitted to the log on every
/// successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: EntityKind,
    pub change: Change,
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.change {
            Change::Created(id) => write!(f, "{}: created {id}", self.kind),
            Change::Updated(id) => write!(f, "{}: updated {id}", self.kind),
            Change::Deleted(id) => write!(f, "{}: deleted {id}", self.kind),
        }
    }
}

/// Optional nullary reload callback
///
/// Cloning shares the underlying callback.
#[derive(Clone, Default)]
pub struct ReloadHook {
    callback: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl ReloadHook {
    /// Hook that does nothing when fired
    pub fn none() -> Self {
        Self::default()
    }

    /// Hook wrapping `callback`
    pub fn new(callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            callback: Some(Arc::new(callback)),
        }
    }

    /// Whether a callback is installed
    pub fn is_set(&self) -> bool {
        self.callback.is_some()
    }

    /// Invoke the callback, if any
    pub fn fire(&self) {
        if let Some(callback) = &self.callback {
            callback();
        }
    }
}

impl fmt::Debug for ReloadHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReloadHook")
            .field("set", &self.is_set())
            .finish()
    }
}
