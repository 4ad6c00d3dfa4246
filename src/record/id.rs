//! Record identity
//!
//! Ids are milliseconds-since-epoch at creation time, the same scheme the
//! original app used (`Date.now()`), kept so existing documents stay
//! readable. The generator additionally guarantees strict monotonicity:
//! two creates in the same millisecond, or a clock rollback, can never
//! hand out a duplicate id.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Opaque unique identifier of a record within its collection
///
/// Serialized as a plain JSON number for compatibility with documents
/// written by the original app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(raw: u64) -> Self {
        RecordId(raw)
    }
}

/// Monotonic id source
///
/// Returns `max(now_millis, last + 1)` so every generated id is strictly
/// greater than the previous one regardless of clock behavior.
pub struct IdGenerator {
    last: Mutex<u64>,
}

impl IdGenerator {
    /// Create a generator with no history
    pub fn new() -> Self {
        Self { last: Mutex::new(0) }
    }

    /// Generate the next id
    pub fn next_id(&self) -> RecordId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let mut last = self.last.lock();
        let id = now.max(*last + 1);
        *last = id;
        RecordId(id)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
