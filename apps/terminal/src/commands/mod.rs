//! # Command Handlers
//!
//! Each submodule covers one screen of the canteen workflow:
//!
//! - [`product`] - catalog CRUD
//! - [`sale`] - sale processing and undo
//! - [`report`] - recent-sales report and dashboard
//!
//! Handlers take plain values, call into the core through [`LedgerState`],
//! and return serializable responses. All logging happens here; the core
//! never logs.
//!
//! [`LedgerState`]: crate::state::LedgerState

pub mod product;
pub mod report;
pub mod sale;
