//! # Undo Stack
//!
//! Unbounded last-in-first-out log of committed sales.
//!
//! ## Role in the System
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         UndoStack                                       │
//! │                                                                         │
//! │  sell()  ──► push ──►  ┌──────────────┐  ◄── peek / pop (undo_last)    │
//! │                        │ sale #4  TOP │                                 │
//! │                        │ sale #3      │                                 │
//! │                        │ sale #2      │                                 │
//! │                        │ sale #1      │                                 │
//! │                        └──────────────┘                                 │
//! │                                                                         │
//! │  • The top entry is always the most recent successful sale              │
//! │  • No capacity bound: grows with total sales for the process lifetime   │
//! │  • Popping is permanent: undo is single-level, there is no redo         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;
use crate::types::SaleRecord;

/// Last-in-first-out history of committed sales, unbounded.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    entries: Vec<SaleRecord>,
}

impl UndoStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        UndoStack { entries: Vec::new() }
    }

    /// Pushes a sale onto the stack. O(1), always succeeds.
    pub fn push(&mut self, sale: SaleRecord) {
        self.entries.push(sale);
    }

    /// Removes and returns the most recent sale, `None` when empty.
    pub fn pop(&mut self) -> Option<SaleRecord> {
        self.entries.pop()
    }

    /// Returns the most recent sale without removing it.
    pub fn peek(&self) -> Option<&SaleRecord> {
        self.entries.last()
    }

    /// Checks if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of sales in the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates newest to oldest (display order).
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &SaleRecord> {
        self.entries.iter().rev()
    }

    /// Snapshot of the full history, newest to oldest.
    pub fn to_vec(&self) -> Vec<SaleRecord> {
        self.iter_newest_first().cloned().collect()
    }

    /// Sum of all sale totals on the stack.
    pub fn total(&self) -> Money {
        self.entries.iter().map(SaleRecord::total).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentMode;
    use chrono::Utc;

    fn sale(name: &str, total_cents: i64) -> SaleRecord {
        SaleRecord {
            product_name: name.to_string(),
            quantity: 1,
            total_cents,
            payment_mode: PaymentMode::Cash,
            reference_number: None,
            unit_price_cents: total_cents,
            sold_at: Utc::now(),
        }
    }

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = UndoStack::new();
        stack.push(sale("A", 100));
        stack.push(sale("B", 200));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop().unwrap().product_name, "B");
        assert_eq!(stack.pop().unwrap().product_name, "A");
        assert!(stack.pop().is_none());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_peek_is_non_destructive() {
        let mut stack = UndoStack::new();
        assert!(stack.peek().is_none());

        stack.push(sale("A", 100));
        assert_eq!(stack.peek().unwrap().product_name, "A");
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_to_vec_newest_first() {
        let mut stack = UndoStack::new();
        stack.push(sale("A", 100));
        stack.push(sale("B", 200));
        stack.push(sale("C", 300));

        let names: Vec<_> = stack.to_vec().into_iter().map(|s| s.product_name).collect();
        assert_eq!(names, ["C", "B", "A"]);
    }

    #[test]
    fn test_total() {
        let mut stack = UndoStack::new();
        assert_eq!(stack.total(), Money::zero());

        stack.push(sale("A", 100));
        stack.push(sale("B", 250));
        assert_eq!(stack.total(), Money::from_cents(350));
    }
}
