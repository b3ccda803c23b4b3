//! # Catalog
//!
//! The ordered product catalog.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Storage                                  │
//! │                                                                         │
//! │  products: Vec<Product>        index: HashMap<u64, usize>               │
//! │  ┌──────────────────────┐      ┌────────────────┐                       │
//! │  │ [0] id=1 "Rice"      │◄─────│ 1 → 0          │                       │
//! │  │ [1] id=2 "Corn"      │◄─────│ 2 → 1          │                       │
//! │  │ [2] id=4 "Egg"       │◄─────│ 4 → 2          │  (id 3 was deleted;   │
//! │  └──────────────────────┘      └────────────────┘   never reassigned)   │
//! │                                                                         │
//! │  • Vec order = insertion order = canonical enumeration order            │
//! │  • The id → position map gives O(1) point lookup                        │
//! │  • next_id is a field of the instance, not a process global             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Name lookups stay linear scans: the sale path must resolve duplicate
//! names to the earliest-added product, and insertion order is exactly what
//! the Vec already holds.

use std::collections::HashMap;

use crate::error::ValidationResult;
use crate::money::Money;
use crate::types::{normalize_name, Product, ProductPatch};
use crate::validation::{validate_price, validate_product_name, validate_stock};

/// Ordered mapping from product identifier to product record.
///
/// ## Invariants
/// - Identifiers are unique, monotonically assigned, never reused
/// - Insertion order is preserved and is the enumeration order
/// - `index` maps every live id to its current Vec position
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<u64, usize>,
    next_id: u64,
}

impl Catalog {
    /// Creates an empty catalog. The first assigned identifier is 1.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
        }
    }

    /// Adds a product and returns its assigned identifier.
    ///
    /// ## Constraints
    /// - `name` non-empty (after trimming)
    /// - `stock >= 0`
    /// - `price` non-negative
    ///
    /// Constraint violations are caller-input errors; the catalog itself
    /// has no failure path here.
    pub fn add(&mut self, name: &str, stock: i64, unit: &str, price: Money) -> ValidationResult<u64> {
        validate_product_name(name)?;
        validate_stock(stock)?;
        validate_price(price)?;

        let id = self.next_id;
        self.next_id += 1;

        self.index.insert(id, self.products.len());
        self.products.push(Product {
            id,
            name: name.trim().to_string(),
            stock,
            unit: unit.trim().to_string(),
            price_cents: price.cents(),
        });

        Ok(id)
    }

    /// Point lookup by identifier.
    pub fn get(&self, id: u64) -> Option<&Product> {
        self.index.get(&id).map(|&pos| &self.products[pos])
    }

    /// Mutable point lookup by identifier.
    ///
    /// Crate-private: external callers mutate through [`Catalog::update`]
    /// and the engine's sale paths only.
    pub(crate) fn get_mut(&mut self, id: u64) -> Option<&mut Product> {
        let pos = *self.index.get(&id)?;
        Some(&mut self.products[pos])
    }

    /// Finds the first product with an exactly matching name, in insertion
    /// order. The sale path uses this, so duplicate names resolve to the
    /// earliest-added product.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Finds the first product whose normalized (trimmed, lowercased) name
    /// matches. The undo stock re-credit uses this looser rule.
    pub fn find_by_name_normalized(&self, name: &str) -> Option<&Product> {
        let wanted = normalize_name(name);
        self.products
            .iter()
            .find(|p| normalize_name(&p.name) == wanted)
    }

    /// Crate-private mutable variant of [`Catalog::find_by_name_normalized`].
    pub(crate) fn find_by_name_normalized_mut(&mut self, name: &str) -> Option<&mut Product> {
        let wanted = normalize_name(name);
        self.products
            .iter_mut()
            .find(|p| normalize_name(&p.name) == wanted)
    }

    /// Partially updates a product in place.
    ///
    /// `None` fields are left untouched. The identifier and the position in
    /// the enumeration order never change. Changed fields are validated
    /// first, so a rejected patch leaves the product untouched.
    ///
    /// ## Returns
    /// `Some(())` on success, `None` when the id does not exist. Validation
    /// failures surface as `Some(Err(..))`.
    pub fn update(&mut self, id: u64, patch: ProductPatch) -> Option<ValidationResult<()>> {
        // Validate before touching anything
        if let Some(name) = &patch.name {
            if let Err(e) = validate_product_name(name) {
                return Some(Err(e));
            }
        }
        if let Some(stock) = patch.stock {
            if let Err(e) = validate_stock(stock) {
                return Some(Err(e));
            }
        }
        if let Some(price_cents) = patch.price_cents {
            if let Err(e) = validate_price(Money::from_cents(price_cents)) {
                return Some(Err(e));
            }
        }

        let product = self.get_mut(id)?;
        if let Some(name) = patch.name {
            product.name = name.trim().to_string();
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }
        if let Some(unit) = patch.unit {
            product.unit = unit.trim().to_string();
        }
        if let Some(price_cents) = patch.price_cents {
            product.price_cents = price_cents;
        }

        Some(Ok(()))
    }

    /// Removes a product.
    ///
    /// The identifier is never reassigned, and historical sale records are
    /// untouched (they carry their own copy of the product name).
    ///
    /// ## Returns
    /// `true` when the product existed.
    pub fn delete(&mut self, id: u64) -> bool {
        let Some(pos) = self.index.remove(&id) else {
            return false;
        };
        self.products.remove(pos);

        // Every product after the removed slot shifted left by one
        for p in &self.products[pos..] {
            if let Some(entry) = self.index.get_mut(&p.id) {
                *entry -= 1;
            }
        }

        true
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
