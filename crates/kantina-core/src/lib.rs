//! # kantina-core: Pure Business Logic for Kantina
//!
//! This crate is the **heart** of Kantina, an in-memory transactional
//! inventory ledger for a small canteen. It contains all business logic as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kantina Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (apps/terminal)                    │   │
//! │  │    product commands ──► sale commands ──► report commands       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain values in, records out           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kantina-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   undo    │  │   recent   │  │  engine   │  │   │
//! │  │   │  Catalog  │  │ UndoStack │  │RecentLedger│  │LedgerEngine│ │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐                 │   │
//! │  │   │   types   │  │   money   │  │ validation │                 │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBALS • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, SaleRecord, PaymentMode)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`catalog`] - Ordered product catalog with O(1) id lookup
//! - [`undo`] - Unbounded LIFO history of committed sales
//! - [`recent`] - Bounded FIFO window of recent sales
//! - [`engine`] - The orchestrator: sell, undo, report views
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic apart from sale
//!    timestamps - no hidden state, no process globals
//! 2. **No I/O**: The core never logs, prints, or terminates the process;
//!    translating errors into messages is the caller's job
//! 3. **Integer Money**: All monetary values are in centavos (i64) to avoid
//!    float errors - sale matching compares totals exactly
//! 4. **All-or-Nothing**: Every failure is rejected before any mutation, so
//!    the catalog, undo stack, and recent ledger always agree
//!
//! ## Example Usage
//!
//! ```rust
//! use kantina_core::{LedgerEngine, Money, PaymentMode};
//!
//! let mut engine = LedgerEngine::new();
//! engine.add_product("Rice", 50, "kg", Money::from_cents(200)).unwrap();
//!
//! // Sell 5 kg for cash: total = 5 × ₱2.00 = ₱10.00
//! let sale = engine.sell("Rice", 5, PaymentMode::Cash, "").unwrap();
//! assert_eq!(sale.total().cents(), 1000);
//! assert_eq!(engine.products()[0].stock, 45);
//!
//! // Change of heart: reverse the most recent sale
//! let _ = engine.undo_last();
//! assert_eq!(engine.total_sales(), Money::zero());
//! assert_eq!(engine.products()[0].stock, 50);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod engine;
pub mod error;
pub mod money;
pub mod recent;
pub mod types;
pub mod undo;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kantina_core::LedgerEngine` instead of
// `use kantina_core::engine::LedgerEngine`

pub use catalog::Catalog;
pub use engine::LedgerEngine;
pub use error::{LedgerError, LedgerResult, ValidationError, ValidationResult};
pub use money::Money;
pub use recent::RecentLedger;
pub use types::{normalize_name, PaymentMode, Product, ProductPatch, SaleRecord};
pub use undo::UndoStack;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default capacity of the recent-sales ledger.
///
/// ## Why 10?
/// The recent ledger backs the reports view: a rolling window of the last
/// few sales, oldest dropped first. Ten entries fit one screen. The full
/// history lives on the (unbounded) undo stack; tests that exercise the
/// eviction policy construct engines with smaller capacities via
/// [`LedgerEngine::with_recent_capacity`].
pub const RECENT_LEDGER_CAPACITY: usize = 10;
