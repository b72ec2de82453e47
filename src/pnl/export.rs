//! CSV rendering of the daily ledger for the reporting feature.
//!
//! Fixed numeric columns, so no quoting or escaping is involved. Values are
//! converted from paise to rupees here and nowhere earlier.

use crate::pnl::report::DailyPnl;

const HEADERS: [&str; 7] = [
    "Date",
    "Revenue (INR)",
    "COGS (INR)",
    "Fees (INR)",
    "Shipping (INR)",
    "Net Profit (INR)",
    "Margin (%)",
];

/// Renders one row per day, in the order given by the caller.
pub fn daily_to_csv(daily: &[DailyPnl]) -> String {
    let mut out = String::new();
    out.push_str(&HEADERS.join(","));
    out.push('\n');
    for day in daily {
        out.push_str(&format!(
            "{},{},{},{},{},{},{:.2}%\n",
            day.date.format("%Y-%m-%d"),
            paise_to_inr(day.revenue),
            paise_to_inr(day.cogs),
            paise_to_inr(day.fees),
            paise_to_inr(day.shipping),
            paise_to_inr(day.net_profit),
            day.margin,
        ));
    }
    out
}

/// Rupees with two decimal places, e.g. `-617` paise renders as `-6.17`.
fn paise_to_inr(paise: i64) -> String {
    let sign = if paise < 0 { "-" } else { "" };
    let abs = paise.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
