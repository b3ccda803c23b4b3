//! # Product Commands
//!
//! Catalog CRUD: add, list, edit, and delete products.

use tracing::{debug, info};

use kantina_core::{Money, Product, ProductPatch};

use crate::error::AppError;
use crate::state::LedgerState;

/// Adds a product to the catalog.
pub fn add_product(
    state: &LedgerState,
    name: &str,
    stock: i64,
    unit: &str,
    price: Money,
) -> Result<Product, AppError> {
    debug!(name = %name, stock, price = %price, "add_product command");

    let product = state.with_engine_mut(|e| e.add_product(name, stock, unit, price))?;

    info!(id = product.id, name = %product.name, "Product added");
    Ok(product)
}

/// Lists the catalog in insertion order.
pub fn list_products(state: &LedgerState) -> Vec<Product> {
    debug!("list_products command");
    state.with_engine(|e| e.products())
}

/// Partially updates a product.
pub fn edit_product(state: &LedgerState, id: u64, patch: ProductPatch) -> Result<Product, AppError> {
    debug!(id, "edit_product command");

    let product = state.with_engine_mut(|e| e.update_product(id, patch))?;

    info!(id, name = %product.name, "Product updated");
    Ok(product)
}

/// Deletes a product. Historical sale records are unaffected.
pub fn delete_product(state: &LedgerState, id: u64) -> Result<(), AppError> {
    debug!(id, "delete_product command");

    state.with_engine_mut(|e| e.delete_product(id))?;

    info!(id, "Product deleted");
    Ok(())
}
