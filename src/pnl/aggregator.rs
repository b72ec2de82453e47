//! The computational core: folds the order history, the live catalog and the
//! override store into the daily ledger.
//!
//! Two passes. The first folds every qualifying order into a per-date bucket:
//! revenue and COGS accumulate item by item, the default platform fee order
//! by order, and each day keeps one summary row per distinct product. The
//! second overlays the manual overrides and derives net profit and margin.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{Order, OrderItem, Product};
use crate::pnl::overrides::OverrideStore;
use crate::pnl::report::{DailyItemSummary, DailyPnl, PnlReport, PnlTotals};
use crate::{PnlError, Result};

/// Flat platform-fee assumption applied per order when no fee override
/// exists for the day.
const PLATFORM_FEE_RATE: f64 = 0.02;

/// Overrides are entered in whole rupees; they meet the paise ledger only
/// here, in the overlay pass.
const PAISE_PER_RUPEE: i64 = 100;

/// Computes the full daily ledger and running totals from the four inputs.
///
/// Pure and recomputed from scratch on every call, so edits to product cost
/// prices or overrides are reflected immediately — COGS always uses the
/// catalog's *current* cost, never a cost captured at order time.
///
/// The returned `daily` list is in no particular order; callers sort.
pub fn aggregate(
    orders: &[Order],
    products: &[Product],
    overrides: &OverrideStore,
) -> Result<PnlReport> {
    // Last write wins should the catalog ever hold duplicate ids.
    let cost_by_product: HashMap<Uuid, i64> = products
        .iter()
        .map(|p| (p.id, p.cost_price_in_paise))
        .collect();

    let mut daily_map: HashMap<NaiveDate, DailyPnl> = HashMap::new();

    for order in orders.iter().filter(|o| o.is_realized()) {
        let date = order.business_date();
        let day = daily_map.entry(date).or_insert_with(|| empty_day(date));

        for item in &order.items {
            if item.quantity <= 0 {
                return Err(PnlError::InvalidQuantity {
                    order_id: order.id,
                    product_id: item.product.id,
                    quantity: item.quantity,
                });
            }

            // Missing catalog entries (deleted products) cost zero; the
            // snapshot still carries the revenue side.
            let unit_cost = cost_by_product.get(&item.product.id).copied().unwrap_or(0);
            let item_revenue = item.product.price_in_paise * item.quantity;
            let item_cost = unit_cost * item.quantity;

            day.revenue += item_revenue;
            day.cogs += item_cost;
            merge_item(day, order.id, item, unit_cost, item_revenue, item_cost);
        }

        // Provisional: replaced outright if a fee override exists for the day.
        day.fees += default_fee(order.total_in_paise);
    }

    let mut daily: Vec<DailyPnl> = daily_map.into_values().collect();
    for day in &mut daily {
        apply_overrides(day, overrides);
    }

    let totals = daily.iter().fold(PnlTotals::default(), |acc, day| PnlTotals {
        revenue: acc.revenue + day.revenue,
        cogs: acc.cogs + day.cogs,
        fees: acc.fees + day.fees,
        shipping: acc.shipping + day.shipping,
        net_profit: acc.net_profit + day.net_profit,
    });

    Ok(PnlReport { daily, totals })
}

fn empty_day(date: NaiveDate) -> DailyPnl {
    DailyPnl {
        date,
        revenue: 0,
        cogs: 0,
        fees: 0,
        shipping: 0,
        net_profit: 0,
        margin: 0.0,
        items: Vec::new(),
    }
}

/// Halves round away from zero.
fn default_fee(order_total_in_paise: i64) -> i64 {
    (order_total_in_paise as f64 * PLATFORM_FEE_RATE).round() as i64
}

fn merge_item(
    day: &mut DailyPnl,
    order_id: Uuid,
    item: &OrderItem,
    unit_cost: i64,
    item_revenue: i64,
    item_cost: i64,
) {
    if let Some(existing) = day.items.iter_mut().find(|i| i.product_id == item.product.id) {
        existing.quantity += item.quantity;
        existing.revenue += item_revenue;
        existing.total_cost += item_cost;
        // The row always shows the latest looked-up cost, even when it is
        // built up across several orders.
        existing.unit_cost = unit_cost;
        if !existing.order_ids.contains(&order_id) {
            existing.order_ids.push(order_id);
        }
    } else {
        day.items.push(DailyItemSummary {
            product_id: item.product.id,
            product_name: item.product.name.clone(),
            product_image: item.product.image.clone(),
            quantity: item.quantity,
            revenue: item_revenue,
            unit_cost,
            total_cost: item_cost,
            order_ids: vec![order_id],
        });
    }
}

fn apply_overrides(day: &mut DailyPnl, overrides: &OverrideStore) {
    // A fee override replaces the accumulated default outright.
    if let Some(fee_rupees) = overrides.fee_for(day.date) {
        day.fees = fee_rupees * PAISE_PER_RUPEE;
    }
    // Shipping is purely override-driven; there is no computed default.
    day.shipping = overrides.shipping_for(day.date).unwrap_or(0) * PAISE_PER_RUPEE;

    day.net_profit = day.revenue - (day.cogs + day.fees + day.shipping);
    day.margin = if day.revenue > 0 {
        (day.net_profit as f64 / day.revenue as f64) * 100.0
    } else {
        0.0
    };
}
