//! # Validation Module
//!
//! Input validation utilities for Kantina.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (terminal / web form)                            │
//! │  ├── Basic format checks (numeric fields parse)                         │
//! │  └── Immediate operator feedback                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Business rule validation (quantity >= 1, price >= 0, ...)          │
//! │  └── Runs BEFORE any mutation: a validation failure guarantees the      │
//! │      catalog, undo stack, and recent ledger are untouched               │
//! │                                                                         │
//! │  Defense in depth: both layers catch different errors                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kantina_core::validation::{validate_product_name, validate_quantity};
//!
//! assert!(validate_product_name("Rice").is_ok());
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::PaymentMode;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a payment reference number against the payment mode.
///
/// ## Rules
/// - E-wallet modes (GCash, PayMaya): reference must be non-empty
/// - Cash: reference is always absent; stray input is dropped
///
/// ## Returns
/// The trimmed reference as `Some(..)` for e-wallet modes, `None` for
/// cash. A sale record stores exactly this value, so a reference is
/// present iff the mode requires one.
///
/// ## Example
/// ```rust
/// use kantina_core::types::PaymentMode;
/// use kantina_core::validation::validate_reference;
///
/// assert!(validate_reference(PaymentMode::GCash, "").is_err());
/// assert_eq!(
///     validate_reference(PaymentMode::GCash, " GC-1234 ").unwrap(),
///     Some("GC-1234".to_string())
/// );
/// assert_eq!(validate_reference(PaymentMode::Cash, "").unwrap(), None);
/// ```
pub fn validate_reference(mode: PaymentMode, reference: &str) -> ValidationResult<Option<String>> {
    let reference = reference.trim();

    if mode.requires_reference() {
        if reference.is_empty() {
            return Err(ValidationError::Required {
                field: "reference_number".to_string(),
            });
        }
        return Ok(Some(reference.to_string()));
    }

    Ok(None)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a sale quantity.
///
/// ## Rules
/// - Must be positive (>= 1)
///
/// There is no upper bound here; the stock check in the engine is the
/// effective ceiling.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (out-of-stock product stays listed)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::NegativeValue {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::NegativeValue {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
