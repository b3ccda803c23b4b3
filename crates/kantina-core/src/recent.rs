//! # Recent Ledger
//!
//! Bounded first-in-first-out window of recent sales, used for reporting.
//!
//! ## Eviction Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  RecentLedger (capacity = 3)                            │
//! │                                                                         │
//! │  enqueue(D) when full:                                                  │
//! │                                                                         │
//! │   head                    tail          head                    tail    │
//! │   ┌─────┬─────┬─────┐                   ┌─────┬─────┬─────┐             │
//! │   │  A  │  B  │  C  │   ──► evict A ──► │  B  │  C  │  D  │             │
//! │   └─────┴─────┴─────┘                   └─────┴─────┴─────┘             │
//! │                                                                         │
//! │  The ledger always holds the most recent CAPACITY sales,                │
//! │  oldest dropped first.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `remove_matching` exists for the undo path: it evicts a *specific*
//! historical sale, which may sit anywhere in the window, not just at the
//! head. `VecDeque::remove` keeps the relative order of the remainder and
//! the head/tail bookkeeping correct for every position.

use std::collections::VecDeque;

use crate::types::SaleRecord;

/// First-in-first-out bounded window of recent sales.
#[derive(Debug, Clone)]
pub struct RecentLedger {
    entries: VecDeque<SaleRecord>,
    capacity: usize,
}

impl RecentLedger {
    /// Creates an empty ledger with the given capacity.
    ///
    /// A zero capacity is clamped to 1; a ledger that can hold nothing
    /// would make every enqueue a silent drop.
    pub fn new(capacity: usize) -> Self {
        RecentLedger {
            entries: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    /// Appends a sale at the tail, evicting the oldest entry first when
    /// the ledger is at capacity.
    pub fn enqueue(&mut self, sale: SaleRecord) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(sale);
    }

    /// Removes and returns the oldest entry, `None` when empty.
    pub fn dequeue(&mut self) -> Option<SaleRecord> {
        self.entries.pop_front()
    }

    /// Returns the oldest entry without removing it.
    pub fn peek(&self) -> Option<&SaleRecord> {
        self.entries.front()
    }

    /// Checks if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of sales currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The fixed capacity of the window.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Scans from the head and removes the first entry satisfying the
    /// predicate, preserving the relative order of the remainder.
    ///
    /// ## Returns
    /// The removed entry, or `None` when nothing matched (e.g. the target
    /// was already evicted by capacity pressure).
    pub fn remove_matching<F>(&mut self, predicate: F) -> Option<SaleRecord>
    where
        F: Fn(&SaleRecord) -> bool,
    {
        let pos = self.entries.iter().position(|sale| predicate(sale))?;
        self.entries.remove(pos)
    }

    /// Iterates oldest to newest (ledger order).
    pub fn iter(&self) -> impl Iterator<Item = &SaleRecord> {
        self.entries.iter()
    }

    /// Snapshot of the window, oldest to newest.
    pub fn to_vec(&self) -> Vec<SaleRecord> {
        self.entries.iter().cloned().collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
