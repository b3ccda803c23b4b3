//! # Report Commands
//!
//! Read-only views: the recent-sales report and the dashboard summary.
//! Responses carry pre-formatted display fields so the REPL (or any future
//! front end) never does money or date math itself.

use serde::Serialize;
use tracing::debug;

use kantina_core::{Product, SaleRecord};

use crate::state::LedgerState;

/// One row of a sales report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub product: String,
    pub quantity: i64,
    pub total: String,
    pub payment_mode: String,
    pub reference_number: Option<String>,
    pub sold_at: String,
}

impl From<&SaleRecord> for ReportEntry {
    fn from(sale: &SaleRecord) -> Self {
        ReportEntry {
            product: sale.product_name.clone(),
            quantity: sale.quantity,
            total: sale.total().to_string(),
            payment_mode: sale.payment_mode.to_string(),
            reference_number: sale.reference_number.clone(),
            sold_at: sale.sold_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Dashboard summary: catalog, full history, aggregate total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub products: Vec<Product>,
    pub sales: Vec<ReportEntry>,
    pub total_sales: String,
}

/// The recent-sales window, newest first.
pub fn sales_report(state: &LedgerState) -> Vec<ReportEntry> {
    debug!("sales_report command");
    state.with_engine(|e| e.recent_report().iter().map(ReportEntry::from).collect())
}

/// Products, full sale history (newest first), and the running total.
pub fn dashboard(state: &LedgerState) -> Dashboard {
    debug!("dashboard command");
    state.with_engine(|e| Dashboard {
        products: e.products(),
        sales: e.sales_newest_first().iter().map(ReportEntry::from).collect(),
        total_sales: e.total_sales().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::product::add_product;
    use crate::commands::sale::process_sale;
    use kantina_core::{Money, PaymentMode};

    #[test]
    fn test_report_newest_first() {
        let state = LedgerState::new();
        add_product(&state, "Rice", 50, "kg", Money::from_cents(200)).unwrap();
        add_product(&state, "Corn", 50, "kg", Money::from_cents(150)).unwrap();

        process_sale(&state, "Rice", 1, PaymentMode::Cash, "").unwrap();
        process_sale(&state, "Corn", 2, PaymentMode::Cash, "").unwrap();

        let report = sales_report(&state);
        assert_eq!(report[0].product, "Corn");
        assert_eq!(report[1].product, "Rice");
    }

    #[test]
    fn test_dashboard_totals() {
        let state = LedgerState::new();
        add_product(&state, "Rice", 50, "kg", Money::from_cents(200)).unwrap();
        process_sale(&state, "Rice", 5, PaymentMode::Cash, "").unwrap();

        let dash = dashboard(&state);
        assert_eq!(dash.products.len(), 1);
        assert_eq!(dash.sales.len(), 1);
        assert_eq!(dash.total_sales, "₱10.00");
    }
}
