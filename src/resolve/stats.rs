//! Resolution statistics tracking.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use crate::dns::EntryKind;

/// Thread-safe counters for a single resolution run.
///
/// Shared by both stages through `Arc`. All entry kinds are initialized to
/// zero on creation.
pub struct ResolutionStats {
    domains: AtomicUsize,
    records: AtomicUsize,
    entries: HashMap<EntryKind, AtomicUsize>,
}

impl ResolutionStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        for kind in EntryKind::iter() {
            entries.insert(kind, AtomicUsize::new(0));
        }

        ResolutionStats {
            domains: AtomicUsize::new(0),
            records: AtomicUsize::new(0),
            entries,
        }
    }

    /// Records a successful lookup that returned `record_count` TXT records.
    pub fn record_domain(&self, record_count: usize) {
        self.domains.fetch_add(1, Ordering::Relaxed);
        self.records.fetch_add(record_count, Ordering::Relaxed);
    }

    /// Increment the counter for a classified entry.
    pub fn increment_entry(&self, kind: EntryKind) {
        if let Some(counter) = self.entries.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment entry counter for {:?} which is not in the map. \
                 This indicates a bug in ResolutionStats initialization.",
                kind
            );
        }
    }

    /// Number of domains successfully queried.
    pub fn domains_queried(&self) -> usize {
        self.domains.load(Ordering::SeqCst)
    }

    /// Number of TXT records read across all domains.
    pub fn records_read(&self) -> usize {
        self.records.load(Ordering::SeqCst)
    }

    /// Get the count for an entry kind.
    pub fn entry_count(&self, kind: EntryKind) -> usize {
        self.entries
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total entry count across all kinds.
    pub fn total_entries(&self) -> usize {
        EntryKind::iter().map(|k| self.entry_count(k)).sum()
    }
}

impl Default for ResolutionStats {
    fn default() -> Self {
        Self::new()
    }
}
