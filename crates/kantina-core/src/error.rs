//! # Error Types
//!
//! Domain-specific error types for kantina-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kantina-core errors (this file)                                        │
//! │  ├── LedgerError      - Business rule failures                          │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  Terminal app errors (apps/terminal)                                    │
//! │  └── AppError         - What the operator sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → LedgerError → AppError → Operator              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, quantities, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every failure is recoverable: the engine rejects before mutating, so
//!    a returned error guarantees the catalog, undo stack, and recent
//!    ledger are all unchanged

use thiserror::Error;

// =============================================================================
// Ledger Error
// =============================================================================

/// Business logic errors raised by the ledger engine.
///
/// There are no fatal kinds here. Every variant is rejected before any
/// mutation, so callers can always retry with corrected input.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Product cannot be found.
    ///
    /// ## When This Occurs
    /// - A sale names a product that was never added
    /// - A catalog operation references a deleted identifier
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Insufficient stock to complete a sale.
    ///
    /// ## When This Occurs
    /// - Requested quantity exceeds the product's current stock
    ///
    /// ## User Workflow
    /// ```text
    /// Sell "Rice" (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Rice", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Only 3 Rice in stock"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    NegativeValue { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
