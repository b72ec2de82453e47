//! The P&L core: derived daily ledger, override store and CSV export.
//!
//! Everything in here is pure with respect to its inputs; persistence and
//! transport live in `storage` and `main`.

pub mod aggregator;
pub mod export;
pub mod overrides;
pub mod report;

pub use aggregator::aggregate;
pub use overrides::{OverrideKind, OverrideStore};
pub use report::{DailyItemSummary, DailyPnl, PnlReport, PnlTotals};
