//! Result store: the live list of records plus run progress.
//!
//! Readers (display, export) take snapshots; only the engine mutates. Records
//! and progress share one lock, so a snapshot never mixes two states.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::mapping::{MappingRecord, MappingStatus};

/// Progress of the current run: `current` is the 1-based index of the record
/// being checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

/// A consistent copy of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot {
    pub records: Vec<MappingRecord>,
    pub progress: Progress,
}

impl StoreSnapshot {
    /// Number of records currently in `status`.
    pub fn count(&self, status: MappingStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }
}

/// Shared handle to the ordered record list.
///
/// Cloning the handle shares the same store.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    inner: Arc<RwLock<StoreSnapshot>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a half-written record
    // (every write is a single assignment), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, StoreSnapshot> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreSnapshot> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.read().clone()
    }

    pub fn records(&self) -> Vec<MappingRecord> {
        self.read().records.clone()
    }

    pub fn progress(&self) -> Progress {
        self.read().progress
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().records.is_empty()
    }

    pub(crate) fn record(&self, index: usize) -> Option<MappingRecord> {
        self.read().records.get(index).cloned()
    }

    /// Replaces all records with a fresh parse and clears progress.
    pub(crate) fn replace(&self, records: Vec<MappingRecord>) {
        let mut inner = self.write();
        inner.records = records;
        inner.progress = Progress::default();
    }

    /// Puts every record back to `pending` and sets progress to `0/len`.
    pub(crate) fn reset_for_run(&self) -> usize {
        let mut inner = self.write();
        inner.records.iter_mut().for_each(MappingRecord::reset);
        let total = inner.records.len();
        inner.progress = Progress { current: 0, total };
        total
    }

    pub(crate) fn set_progress(&self, current: usize, total: usize) {
        self.write().progress = Progress { current, total };
    }

    /// Stores a checked record in its slot.
    ///
    /// Returns false (and stores nothing) if the slot no longer holds a record
    /// with the same id, i.e. the store was cleared in the meantime.
    pub(crate) fn publish(&self, index: usize, record: MappingRecord) -> bool {
        let mut inner = self.write();
        match inner.records.get_mut(index) {
            Some(slot) if slot.id == record.id => {
                *slot = record;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn clear(&self) {
        *self.write() = StoreSnapshot::default();
    }
}
