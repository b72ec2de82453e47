//! Derived ledger types. All monetary fields are integer paise; conversion
//! to display units happens only at presentation time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One product's sales within a single day, aggregated across every
/// qualifying order of that day.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DailyItemSummary {
    pub product_id: Uuid,
    pub product_name: String,
    pub product_image: Option<String>,
    pub quantity: i64,
    pub revenue: i64,
    /// The product's current unit cost, looked up fresh on every aggregation.
    pub unit_cost: i64,
    pub total_cost: i64,
    pub order_ids: Vec<Uuid>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DailyPnl {
    pub date: NaiveDate,
    pub revenue: i64,
    pub cogs: i64,
    pub fees: i64,
    pub shipping: i64,
    pub net_profit: i64,
    /// `net_profit / revenue * 100`; `0.0` when the day had no revenue.
    pub margin: f64,
    pub items: Vec<DailyItemSummary>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct PnlTotals {
    pub revenue: i64,
    pub cogs: i64,
    pub fees: i64,
    pub shipping: i64,
    pub net_profit: i64,
}

impl PnlTotals {
    /// Overall margin, derived the same way as the daily one. Never the sum
    /// of daily margins.
    pub fn margin(&self) -> f64 {
        if self.revenue > 0 {
            (self.net_profit as f64 / self.revenue as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Aggregation result. `daily` carries no ordering guarantee; callers that
/// need a specific order must sort explicitly.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PnlReport {
    pub daily: Vec<DailyPnl>,
    pub totals: PnlTotals,
}

impl PnlReport {
    /// Newest day first, the admin view's presentation default.
    pub fn sort_by_date_desc(&mut self) {
        self.daily.sort_by(|a, b| b.date.cmp(&a.date));
    }
}
