//! JB Crafts P&L Reporting
//!
//! Profit & loss back office for the storefront: reconstructs per-day,
//! per-product financial summaries from the raw order stream, the live
//! product catalog and sparse manual cost overrides.
//!
//! ## Features
//! - Daily revenue / COGS / fees / shipping / net profit ledger
//! - Per-product breakdown within each day
//! - Manual fee and shipping overrides, keyed by calendar date
//! - CSV export for the reporting feature

use thiserror::Error;
use uuid::Uuid;

pub mod domain;
pub mod pnl;
pub mod storage;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum PnlError {
    #[error("order {order_id}: quantity {quantity} for product {product_id} must be positive")]
    InvalidQuantity {
        order_id: Uuid,
        product_id: Uuid,
        quantity: i64,
    },

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, PnlError>;
