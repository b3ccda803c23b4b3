//! # Ledger State
//!
//! Holds the shared ledger engine for the terminal app.
//!
//! ## Thread Safety
//! The engine is wrapped in `Arc<Mutex<T>>`. The core itself is
//! single-threaded by design; this wrapper is the one mutual-exclusion
//! boundary around the triple (catalog, undo stack, recent ledger), so
//! `sell`/`undo` always observe and mutate a consistent snapshot. Partial
//! interleavings - say, a delete racing a sale's stock check - cannot
//! happen through this type.
//!
//! ## Why Not RwLock?
//! Command handlers are quick and most of them mutate. A RwLock would add
//! complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use kantina_core::LedgerEngine;

/// Shared ledger engine state.
#[derive(Debug, Clone)]
pub struct LedgerState {
    engine: Arc<Mutex<LedgerEngine>>,
}

impl LedgerState {
    /// Creates state around a fresh engine.
    pub fn new() -> Self {
        LedgerState {
            engine: Arc::new(Mutex::new(LedgerEngine::new())),
        }
    }

    /// Executes a function with read access to the engine.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = state.with_engine(|e| e.total_sales());
    /// ```
    pub fn with_engine<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&LedgerEngine) -> R,
    {
        let engine = self.engine.lock().expect("Ledger mutex poisoned");
        f(&engine)
    }

    /// Executes a function with write access to the engine.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_engine_mut(|e| e.sell("Rice", 5, PaymentMode::Cash, ""))?;
    /// ```
    pub fn with_engine_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut LedgerEngine) -> R,
    {
        let mut engine = self.engine.lock().expect("Ledger mutex poisoned");
        f(&mut engine)
    }
}

impl Default for LedgerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kantina_core::{Money, PaymentMode};

    #[test]
    fn test_state_round_trip() {
        let state = LedgerState::new();

        state.with_engine_mut(|e| {
            e.add_product("Rice", 50, "kg", Money::from_cents(200)).unwrap();
            e.sell("Rice", 5, PaymentMode::Cash, "").unwrap();
        });

        let total = state.with_engine(|e| e.total_sales());
        assert_eq!(total, Money::from_cents(1000));
    }

    #[test]
    fn test_clones_share_the_engine() {
        let state = LedgerState::new();
        let alias = state.clone();

        state.with_engine_mut(|e| {
            e.add_product("Rice", 50, "kg", Money::from_cents(200)).unwrap();
        });

        assert_eq!(alias.with_engine(|e| e.products().len()), 1);
    }
}
