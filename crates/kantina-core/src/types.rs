//! # Domain Types
//!
//! Core domain types used throughout Kantina.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   SaleRecord    │   │  PaymentMode    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  product_name   │   │  Cash           │       │
//! │  │  name           │   │  quantity       │   │  GCash          │       │
//! │  │  stock          │   │  total_cents    │   │  PayMaya        │       │
//! │  │  unit           │   │  payment_mode   │   └─────────────────┘       │
//! │  │  price_cents    │   │  reference      │                             │
//! │  └─────────────────┘   │  sold_at        │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `SaleRecord` carries a denormalized copy of the product name and the
//! unit price at the time of sale. The record stays meaningful even if the
//! product is later renamed or deleted from the catalog.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Name Normalization
// =============================================================================

/// Normalizes a product name for matching: trimmed and lowercased.
///
/// Both the undo stock re-credit and same-sale equality use this rule, so
/// `" Rice "` and `"rice"` refer to the same product.
#[inline]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Owned exclusively by the [`Catalog`](crate::catalog::Catalog); mutated
/// only through its update and stock-adjust operations. `stock >= 0` holds
/// at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, monotonically assigned, never reused.
    pub id: u64,

    /// Display name shown to the operator and on sale records.
    pub name: String,

    /// Current stock level (never negative).
    pub stock: i64,

    /// Unit label ("kg", "piece", "bottle", ...).
    pub unit: String,

    /// Unit price in centavos (smallest currency unit).
    pub price_cents: i64,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether `quantity` units can be sold from current stock.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

// =============================================================================
// Product Patch
// =============================================================================

/// Partial update for a product.
///
/// `None` fields are left untouched; the identifier and catalog position
/// never change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub stock: Option<i64>,
    pub unit: Option<String>,
    pub price_cents: Option<i64>,
}

// =============================================================================
// Payment Mode
// =============================================================================

/// How the customer paid.
///
/// E-wallet modes (GCash, PayMaya) require a non-empty reference number;
/// cash does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    /// Physical cash payment.
    Cash,
    /// GCash e-wallet transfer.
    GCash,
    /// PayMaya e-wallet transfer.
    PayMaya,
}

impl PaymentMode {
    /// True for e-wallet kinds, which require a transaction reference number.
    #[inline]
    pub const fn requires_reference(&self) -> bool {
        matches!(self, PaymentMode::GCash | PaymentMode::PayMaya)
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::GCash => "GCash",
            PaymentMode::PayMaya => "PayMaya",
        };
        write!(f, "{}", label)
    }
}

/// Parses the operator-facing spelling ("Cash", "GCash", "PayMaya").
impl FromStr for PaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Ok(PaymentMode::Cash),
            "gcash" => Ok(PaymentMode::GCash),
            "paymaya" => Ok(PaymentMode::PayMaya),
            other => Err(format!("unknown payment mode: {}", other)),
        }
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// A committed sale.
///
/// Immutable once created. Lives in two structures at once: the unbounded
/// undo stack (full history, newest on top) and the bounded recent ledger
/// (last N sales for reporting).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Product name at time of sale (denormalized copy, not a reference).
    pub product_name: String,

    /// Quantity sold (always >= 1).
    pub quantity: i64,

    /// Total price in centavos (= quantity × unit price at time of sale).
    pub total_cents: i64,

    /// How the customer paid.
    pub payment_mode: PaymentMode,

    /// Transaction reference; `Some` and non-empty iff the payment mode
    /// is an e-wallet kind.
    pub reference_number: Option<String>,

    /// Unit price in centavos at time of sale (frozen).
    pub unit_price_cents: i64,

    /// When the sale was committed.
    pub sold_at: DateTime<Utc>,
}

impl SaleRecord {
    /// Returns the sale total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Same-sale equality: two records describe the same sale iff the
    /// normalized product name, the quantity, and the total all match.
    ///
    /// ## Why Not Full Equality?
    /// The undo path matches the popped history entry against the recent
    /// ledger. Timestamps and payment details are irrelevant for that
    /// match; name + quantity + total identify the sale.
    pub fn is_same_sale(&self, other: &SaleRecord) -> bool {
        normalize_name(&self.product_name) == normalize_name(&other.product_name)
            && self.quantity == other.quantity
            && self.total_cents == other.total_cents
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
