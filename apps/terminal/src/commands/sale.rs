//! # Sale Commands
//!
//! Sale processing and undo.

use tracing::{debug, info, warn};

use kantina_core::{PaymentMode, SaleRecord};

use crate::error::AppError;
use crate::state::LedgerState;

/// Processes a sale.
///
/// The whole operation - stock check, decrement, history push, ledger
/// enqueue - runs under one lock acquisition, so concurrent callers can
/// never observe a half-committed sale.
pub fn process_sale(
    state: &LedgerState,
    product_name: &str,
    quantity: i64,
    payment_mode: PaymentMode,
    reference_number: &str,
) -> Result<SaleRecord, AppError> {
    debug!(product = %product_name, quantity, mode = %payment_mode, "process_sale command");

    let result =
        state.with_engine_mut(|e| e.sell(product_name, quantity, payment_mode, reference_number));

    match result {
        Ok(sale) => {
            info!(
                product = %sale.product_name,
                quantity = sale.quantity,
                total = %sale.total(),
                "Sale committed"
            );
            Ok(sale)
        }
        Err(err) => {
            warn!(product = %product_name, error = %err, "Sale rejected");
            Err(err.into())
        }
    }
}

/// Reverses the most recent sale, `None` when there is nothing to undo.
pub fn undo_last_sale(state: &LedgerState) -> Option<SaleRecord> {
    debug!("undo_last_sale command");

    match state.with_engine_mut(|e| e.undo_last()) {
        Some(sale) => {
            info!(
                product = %sale.product_name,
                quantity = sale.quantity,
                "Sale reversed"
            );
            Some(sale)
        }
        None => {
            info!("Nothing to undo");
            None
        }
    }
}

/// The most recent sale, if any.
pub fn latest_sale(state: &LedgerState) -> Option<SaleRecord> {
    state.with_engine(|e| e.latest_sale())
}
