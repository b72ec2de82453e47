//! Sparse, date-keyed manual corrections for the two cost categories the
//! system cannot observe from order data.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideKind {
    Shipping,
    Fee,
}

impl OverrideKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shipping => "shipping",
            Self::Fee => "fee",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "shipping" => Some(Self::Shipping),
            "fee" => Some(Self::Fee),
            _ => None,
        }
    }
}

/// Two independent maps from calendar date to a correction amount in whole
/// rupees. An absent key means "no override"; an override of zero is a real
/// value and replaces the computed default.
///
/// Amounts are in rupees, not paise; the aggregator converts when merging
/// them into the paise-denominated ledger.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OverrideStore {
    shipping: HashMap<NaiveDate, i64>,
    fees: HashMap<NaiveDate, i64>,
}

impl OverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Negative amounts are accepted: an override can model a refund or a
    // correction as well as a cost.
    pub fn set(&mut self, kind: OverrideKind, date: NaiveDate, amount_in_rupees: i64) {
        match kind {
            OverrideKind::Shipping => self.shipping.insert(date, amount_in_rupees),
            OverrideKind::Fee => self.fees.insert(date, amount_in_rupees),
        };
    }

    pub fn set_shipping(&mut self, date: NaiveDate, amount_in_rupees: i64) {
        self.set(OverrideKind::Shipping, date, amount_in_rupees);
    }

    pub fn set_fee(&mut self, date: NaiveDate, amount_in_rupees: i64) {
        self.set(OverrideKind::Fee, date, amount_in_rupees);
    }

    pub fn shipping_for(&self, date: NaiveDate) -> Option<i64> {
        self.shipping.get(&date).copied()
    }

    pub fn fee_for(&self, date: NaiveDate) -> Option<i64> {
        self.fees.get(&date).copied()
    }

    pub fn shipping(&self) -> &HashMap<NaiveDate, i64> {
        &self.shipping
    }

    pub fn fees(&self) -> &HashMap<NaiveDate, i64> {
        &self.fees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_set_and_get() {
        let mut store = OverrideStore::new();
        store.set_shipping(date(1), 80);
        store.set_fee(date(1), 12);
        assert_eq!(store.shipping_for(date(1)), Some(80));
        assert_eq!(store.fee_for(date(1)), Some(12));
        assert_eq!(store.shipping_for(date(2)), None);
    }

    #[test]
    fn test_zero_is_distinct_from_absent() {
        let mut store = OverrideStore::new();
        store.set_fee(date(1), 0);
        assert_eq!(store.fee_for(date(1)), Some(0));
        assert_eq!(store.fee_for(date(2)), None);
    }

    #[test]
    fn test_upsert_overwrites() {
        let mut store = OverrideStore::new();
        store.set_shipping(date(1), 80);
        store.set_shipping(date(1), 120);
        assert_eq!(store.shipping_for(date(1)), Some(120));
    }

    #[test]
    fn test_negative_amounts_accepted() {
        let mut store = OverrideStore::new();
        store.set_fee(date(1), -50);
        assert_eq!(store.fee_for(date(1)), Some(-50));
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in [OverrideKind::Shipping, OverrideKind::Fee] {
            assert_eq!(OverrideKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(OverrideKind::parse("tax"), None);
    }
}
