//! # Ledger Engine
//!
//! Orchestrates the catalog, undo stack, and recent ledger.
//!
//! ## Sale Processing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      sell("Rice", 5, Cash, "")                          │
//! │                                                                         │
//! │  1. VALIDATE                                                            │
//! │     ├── quantity >= 1                                                   │
//! │     └── e-wallet mode ⇒ reference number non-empty                      │
//! │  2. LOCATE  ──► Catalog::find_by_name ──► ProductNotFound?             │
//! │  3. CHECK   ──► stock >= quantity      ──► InsufficientStock?          │
//! │  4. COMMIT (no failure path from here on)                               │
//! │     ├── stock -= quantity                                               │
//! │     ├── total = unit_price × quantity                                   │
//! │     ├── UndoStack::push(record)                                         │
//! │     └── RecentLedger::enqueue(record)   (evicts oldest if full)        │
//! │                                                                         │
//! │  Steps 1-3 reject BEFORE any mutation, and no step after 3 can fail,   │
//! │  so the sequence is atomic by construction.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The engine owns all three structures exclusively. Read views hand out
//! clones, never live aliases, so callers cannot corrupt internal order.
//! There is no process-global state: construct as many independent engines
//! as you like (each test gets its own).

use chrono::Utc;

use crate::catalog::Catalog;
use crate::error::{LedgerError, LedgerResult};
use crate::money::Money;
use crate::recent::RecentLedger;
use crate::types::{PaymentMode, Product, ProductPatch, SaleRecord};
use crate::undo::UndoStack;
use crate::validation::{validate_quantity, validate_reference};
use crate::RECENT_LEDGER_CAPACITY;

/// The transactional inventory ledger.
///
/// ## Invariant
/// All three structures reflect the same committed history: the top of the
/// undo stack is the most recent successful sale, and a matching entry
/// exists in the recent ledger unless capacity pressure already evicted it.
#[derive(Debug, Clone)]
pub struct LedgerEngine {
    catalog: Catalog,
    undo: UndoStack,
    recent: RecentLedger,
}

impl LedgerEngine {
    /// Creates an engine with the default recent-ledger capacity
    /// ([`RECENT_LEDGER_CAPACITY`]).
    pub fn new() -> Self {
        Self::with_recent_capacity(RECENT_LEDGER_CAPACITY)
    }

    /// Creates an engine with a custom recent-ledger capacity.
    pub fn with_recent_capacity(capacity: usize) -> Self {
        LedgerEngine {
            catalog: Catalog::new(),
            undo: UndoStack::new(),
            recent: RecentLedger::new(capacity),
        }
    }

    // =========================================================================
    // Catalog CRUD
    // =========================================================================

    /// Adds a product to the catalog and returns a copy of the new record.
    pub fn add_product(
        &mut self,
        name: &str,
        stock: i64,
        unit: &str,
        price: Money,
    ) -> LedgerResult<Product> {
        let id = self.catalog.add(name, stock, unit, price)?;
        // Just inserted under this id
        Ok(self.catalog.get(id).cloned().expect("product just inserted"))
    }

    /// Returns a copy of the product with the given identifier.
    pub fn product(&self, id: u64) -> LedgerResult<Product> {
        self.catalog
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::ProductNotFound(id.to_string()))
    }

    /// Snapshot of the whole catalog in insertion order.
    pub fn products(&self) -> Vec<Product> {
        self.catalog.products().to_vec()
    }

    /// Partially updates a product; returns a copy of the updated record.
    pub fn update_product(&mut self, id: u64, patch: ProductPatch) -> LedgerResult<Product> {
        match self.catalog.update(id, patch) {
            None => Err(LedgerError::ProductNotFound(id.to_string())),
            Some(Err(e)) => Err(e.into()),
            Some(Ok(())) => Ok(self.catalog.get(id).cloned().expect("product exists")),
        }
    }

    /// Deletes a product.
    ///
    /// Historical sale records keep their denormalized product name; the
    /// undo stack and recent ledger are not cascaded into.
    pub fn delete_product(&mut self, id: u64) -> LedgerResult<()> {
        if self.catalog.delete(id) {
            Ok(())
        } else {
            Err(LedgerError::ProductNotFound(id.to_string()))
        }
    }

    // =========================================================================
    // Sale Processing
    // =========================================================================

    /// Processes a sale.
    ///
    /// On success the product's stock is decremented, and the resulting
    /// [`SaleRecord`] is pushed onto the undo stack and enqueued into the
    /// recent ledger (evicting the oldest entry if full).
    ///
    /// ## Errors
    /// - [`LedgerError::Validation`]: quantity < 1, or an e-wallet payment
    ///   without a reference number
    /// - [`LedgerError::ProductNotFound`]: no product with that exact name
    /// - [`LedgerError::InsufficientStock`]: requested quantity exceeds stock
    ///
    /// Every error path rejects before any mutation.
    pub fn sell(
        &mut self,
        product_name: &str,
        quantity: i64,
        payment_mode: PaymentMode,
        reference_number: &str,
    ) -> LedgerResult<SaleRecord> {
        validate_quantity(quantity)?;
        let reference = validate_reference(payment_mode, reference_number)?;

        let product = self
            .catalog
            .find_by_name(product_name)
            .ok_or_else(|| LedgerError::ProductNotFound(product_name.to_string()))?;

        if !product.can_sell(quantity) {
            return Err(LedgerError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: quantity,
            });
        }

        // Commit point: nothing below can fail
        let id = product.id;
        let name = product.name.clone();
        let unit_price = product.price();
        let total = unit_price.multiply_quantity(quantity);

        let product = self.catalog.get_mut(id).expect("product located above");
        product.stock -= quantity;

        let record = SaleRecord {
            product_name: name,
            quantity,
            total_cents: total.cents(),
            payment_mode,
            reference_number: reference,
            unit_price_cents: unit_price.cents(),
            sold_at: Utc::now(),
        };

        self.undo.push(record.clone());
        self.recent.enqueue(record.clone());

        Ok(record)
    }

    /// Reverses the most recent sale.
    ///
    /// Pops the top of the undo stack, re-credits the sold quantity to the
    /// matching product (by normalized name), and removes the matching
    /// entry from the recent ledger.
    ///
    /// ## Tolerated Partial Consistency
    /// - Product deleted since the sale: the stock re-credit is skipped,
    ///   the undo still proceeds
    /// - Entry already evicted from the recent ledger: the removal is a
    ///   no-op for that structure, the undo still succeeds
    ///
    /// ## Returns
    /// The reversed sale, or `None` when there is nothing to undo. Undo is
    /// single-level: the pop is permanent, there is no redo.
    pub fn undo_last(&mut self) -> Option<SaleRecord> {
        let last = self.undo.pop()?;

        if let Some(product) = self.catalog.find_by_name_normalized_mut(&last.product_name) {
            product.stock += last.quantity;
        }

        self.recent.remove_matching(|sale| sale.is_same_sale(&last));

        Some(last)
    }

    // =========================================================================
    // Read Views
    // =========================================================================

    /// Sum of all sale totals in the full history.
    pub fn total_sales(&self) -> Money {
        self.undo.total()
    }

    /// Full sale history, newest first.
    pub fn sales_newest_first(&self) -> Vec<SaleRecord> {
        self.undo.to_vec()
    }

    /// The recent-ledger window, newest first (report order).
    pub fn recent_report(&self) -> Vec<SaleRecord> {
        let mut sales = self.recent.to_vec();
        sales.reverse();
        sales
    }

    /// The most recent sale, if any.
    pub fn latest_sale(&self) -> Option<SaleRecord> {
        self.undo.peek().cloned()
    }

    /// Number of sales in the full history.
    pub fn sales_count(&self) -> usize {
        self.undo.len()
    }
}

impl Default for LedgerEngine {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Engine with "Rice": stock 50, ₱2.00/kg.
    fn engine_with_rice() -> LedgerEngine {
        let mut engine = LedgerEngine::new();
        engine
            .add_product("Rice", 50, "kg", Money::from_cents(200))
            .unwrap();
        engine
    }

    #[test]
    fn test_sell_decrements_stock_and_records() {
        let mut engine = engine_with_rice();

        let sale = engine.sell("Rice", 5, PaymentMode::Cash, "").unwrap();
        assert_eq!(sale.total(), Money::from_cents(1000)); // ₱10.00
        assert_eq!(sale.quantity, 5);
        assert_eq!(sale.reference_number, None);

        assert_eq!(engine.product(1).unwrap().stock, 45);
        assert_eq!(engine.sales_count(), 1);
        assert_eq!(engine.recent_report().len(), 1);
        assert_eq!(engine.latest_sale().unwrap().product_name, "Rice");
    }

    #[test]
    fn test_stock_conservation_over_sequence() {
        let mut engine = engine_with_rice();

        let quantities = [3, 7, 1, 9];
        for qty in quantities {
            engine.sell("Rice", qty, PaymentMode::Cash, "").unwrap();
        }

        let sold: i64 = quantities.iter().sum();
        assert_eq!(engine.product(1).unwrap().stock, 50 - sold);
    }

    #[test]
    fn test_sell_insufficient_stock_no_mutation() {
        let mut engine = engine_with_rice();

        let err = engine.sell("Rice", 51, PaymentMode::Cash, "").unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InsufficientStock {
                available: 50,
                requested: 51,
                ..
            }
        ));

        assert_eq!(engine.product(1).unwrap().stock, 50);
        assert_eq!(engine.sales_count(), 0);
        assert!(engine.recent_report().is_empty());
    }

    #[test]
    fn test_sell_unknown_product() {
        let mut engine = engine_with_rice();
        let err = engine.sell("Adobo", 1, PaymentMode::Cash, "").unwrap_err();
        assert!(matches!(err, LedgerError::ProductNotFound(_)));
    }

    #[test]
    fn test_sell_name_match_is_exact() {
        // The sale path matches the catalog name exactly; only undo
        // re-credit uses the normalized rule
        let mut engine = engine_with_rice();
        let err = engine.sell("rice", 1, PaymentMode::Cash, "").unwrap_err();
        assert!(matches!(err, LedgerError::ProductNotFound(_)));
    }

    #[test]
    fn test_sell_gcash_requires_reference() {
        let mut engine = engine_with_rice();

        let err = engine.sell("Rice", 5, PaymentMode::GCash, "").unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));

        // Zero state change
        assert_eq!(engine.product(1).unwrap().stock, 50);
        assert_eq!(engine.sales_count(), 0);
        assert!(engine.recent_report().is_empty());
    }

    #[test]
    fn test_sell_gcash_with_reference() {
        let mut engine = engine_with_rice();
        let sale = engine
            .sell("Rice", 2, PaymentMode::GCash, " GC-1234 ")
            .unwrap();
        assert_eq!(sale.reference_number.as_deref(), Some("GC-1234"));
    }

    #[test]
    fn test_sell_zero_quantity_rejected() {
        let mut engine = engine_with_rice();
        let err = engine.sell("Rice", 0, PaymentMode::Cash, "").unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
        assert_eq!(engine.product(1).unwrap().stock, 50);
    }

    #[test]
    fn test_sell_then_undo_restores_everything() {
        let mut engine = engine_with_rice();

        engine.sell("Rice", 5, PaymentMode::Cash, "").unwrap();
        assert_eq!(engine.product(1).unwrap().stock, 45);

        let reversed = engine.undo_last().unwrap();
        assert_eq!(reversed.product_name, "Rice");
        assert_eq!(reversed.total(), Money::from_cents(1000));

        // Stock restored, both structures emptied of the sale
        assert_eq!(engine.product(1).unwrap().stock, 50);
        assert_eq!(engine.sales_count(), 0);
        assert!(engine.recent_report().is_empty());
        assert!(engine.latest_sale().is_none());
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut engine = engine_with_rice();
        assert!(engine.undo_last().is_none());
        assert_eq!(engine.product(1).unwrap().stock, 50);
    }

    #[test]
    fn test_undo_is_single_level() {
        let mut engine = engine_with_rice();
        engine.sell("Rice", 5, PaymentMode::Cash, "").unwrap();
        engine.sell("Rice", 3, PaymentMode::Cash, "").unwrap();

        // Only the most recent sale is reversed, and only once
        assert_eq!(engine.undo_last().unwrap().quantity, 3);
        assert_eq!(engine.undo_last().unwrap().quantity, 5);
        assert!(engine.undo_last().is_none());
        assert_eq!(engine.product(1).unwrap().stock, 50);
    }

    #[test]
    fn test_undo_after_product_deleted_skips_recredit() {
        let mut engine = engine_with_rice();
        engine.sell("Rice", 5, PaymentMode::Cash, "").unwrap();
        engine.delete_product(1).unwrap();

        // Undo still proceeds; the re-credit has nowhere to go
        let reversed = engine.undo_last().unwrap();
        assert_eq!(reversed.product_name, "Rice");
        assert_eq!(engine.sales_count(), 0);
        assert!(engine.recent_report().is_empty());
    }

    #[test]
    fn test_undo_recredit_matches_renamed_case() {
        // Re-credit matches by normalized name, so a case-only rename
        // still receives the stock back
        let mut engine = engine_with_rice();
        engine.sell("Rice", 5, PaymentMode::Cash, "").unwrap();
        engine
            .update_product(
                1,
                ProductPatch {
                    name: Some("RICE".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        engine.undo_last().unwrap();
        assert_eq!(engine.product(1).unwrap().stock, 50);
    }

    #[test]
    fn test_undo_after_eviction_still_succeeds() {
        let mut engine = LedgerEngine::with_recent_capacity(2);
        engine
            .add_product("Rice", 100, "kg", Money::from_cents(200))
            .unwrap();

        engine.sell("Rice", 1, PaymentMode::Cash, "").unwrap();
        engine.sell("Rice", 2, PaymentMode::Cash, "").unwrap();
        engine.sell("Rice", 3, PaymentMode::Cash, "").unwrap();

        // Ledger holds [2, 3]; sale of 1 was evicted. Undo the top (3),
        // then twice more: the final undo's ledger removal is a no-op.
        assert_eq!(engine.undo_last().unwrap().quantity, 3);
        assert_eq!(engine.undo_last().unwrap().quantity, 2);
        assert!(engine.recent_report().is_empty());
        assert_eq!(engine.undo_last().unwrap().quantity, 1);

        assert_eq!(engine.product(1).unwrap().stock, 100);
    }

    #[test]
    fn test_capacity_two_scenario() {
        // Ledger at capacity 2 holds A, B; enqueueing C evicts A
        let mut engine = LedgerEngine::with_recent_capacity(2);
        engine.add_product("A", 10, "pc", Money::from_cents(100)).unwrap();
        engine.add_product("B", 10, "pc", Money::from_cents(100)).unwrap();
        engine.add_product("C", 10, "pc", Money::from_cents(100)).unwrap();

        engine.sell("A", 1, PaymentMode::Cash, "").unwrap();
        engine.sell("B", 1, PaymentMode::Cash, "").unwrap();
        engine.sell("C", 1, PaymentMode::Cash, "").unwrap();

        // recent_report is newest first: [C, B]
        let names: Vec<_> = engine
            .recent_report()
            .into_iter()
            .map(|s| s.product_name)
            .collect();
        assert_eq!(names, ["C", "B"]);
    }

    #[test]
    fn test_total_sales_aggregates_full_history() {
        let mut engine = LedgerEngine::with_recent_capacity(2);
        engine
            .add_product("Rice", 100, "kg", Money::from_cents(200))
            .unwrap();

        for _ in 0..5 {
            engine.sell("Rice", 1, PaymentMode::Cash, "").unwrap();
        }

        // The aggregate covers the unbounded stack, not the bounded window
        assert_eq!(engine.total_sales(), Money::from_cents(1000));
        assert_eq!(engine.recent_report().len(), 2);
    }

    #[test]
    fn test_duplicate_names_sell_earliest() {
        let mut engine = LedgerEngine::new();
        engine.add_product("Rice", 10, "kg", Money::from_cents(200)).unwrap();
        engine.add_product("Rice", 99, "sack", Money::from_cents(5000)).unwrap();

        engine.sell("Rice", 1, PaymentMode::Cash, "").unwrap();

        assert_eq!(engine.product(1).unwrap().stock, 9);
        assert_eq!(engine.product(2).unwrap().stock, 99);
    }

    #[test]
    fn test_rice_scenario_end_to_end() {
        // Catalog has "Rice" stock 50 @ ₱2.00; sell 5 cash → total ₱10.00,
        // stock 45; undo → stock 50, ledger empty of the sale
        let mut engine = engine_with_rice();

        let sale = engine.sell("Rice", 5, PaymentMode::Cash, "").unwrap();
        assert_eq!(sale.total().to_string(), "₱10.00");
        assert_eq!(engine.product(1).unwrap().stock, 45);

        engine.undo_last().unwrap();
        assert_eq!(engine.product(1).unwrap().stock, 50);
        assert!(engine.recent_report().is_empty());
    }

    #[test]
    fn test_sale_record_freezes_price() {
        let mut engine = engine_with_rice();
        let sale = engine.sell("Rice", 5, PaymentMode::Cash, "").unwrap();

        engine
            .update_product(
                1,
                ProductPatch {
                    price_cents: Some(999),
                    ..Default::default()
                },
            )
            .unwrap();

        // History is immutable; the frozen unit price survives the edit
        assert_eq!(sale.unit_price_cents, 200);
        assert_eq!(engine.latest_sale().unwrap().unit_price_cents, 200);
    }

    #[test]
    fn test_read_views_are_snapshots() {
        let mut engine = engine_with_rice();
        engine.sell("Rice", 1, PaymentMode::Cash, "").unwrap();

        let mut snapshot = engine.products();
        snapshot[0].stock = 0;

        // Mutating the snapshot does not touch engine state
        assert_eq!(engine.product(1).unwrap().stock, 49);
    }
}
