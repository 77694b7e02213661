// =============================================================================
// Signal Store - Bounded, most-recent-first in-memory history
// =============================================================================
//
// New records go to the front; once the store exceeds its capacity the
// oldest records fall off the back. Nothing is persisted.
// =============================================================================

use std::collections::VecDeque;

use parking_lot::RwLock;

use crate::signals::SignalRecord;

/// Default number of signals retained.
pub const DEFAULT_STORE_CAPACITY: usize = 200;

pub struct SignalStore {
    entries: RwLock<VecDeque<SignalRecord>>,
    capacity: usize,
}

impl SignalStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Insert a record at the front, evicting the oldest beyond capacity.
    pub fn push(&self, record: SignalRecord) {
        let mut entries = self.entries.write();
        entries.push_front(record);
        while entries.len() > self.capacity {
            entries.pop_back();
        }
    }

    /// Up to `limit` records, most recent first.
    pub fn latest(&self, limit: usize) -> Vec<SignalRecord> {
        self.entries.read().iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SignalStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_CAPACITY)
    }
}
