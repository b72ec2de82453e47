//! Orders as produced by checkout, consumed read-only.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

/// The product as it was charged at purchase time. Price and name are frozen
/// here; only the cost side of the ledger consults the live catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub price_in_paise: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: ProductSnapshot,
    pub quantity: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: Uuid,
    pub status: OrderStatus,
    pub total_in_paise: i64,
    pub created_at: DateTime<Utc>,
    #[sqlx(skip)]
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Whether this order counts toward realized revenue. Pending orders may
    /// still be abandoned and cancelled ones never shipped, so both stay out
    /// of the ledger.
    pub fn is_realized(&self) -> bool {
        !matches!(self.status, OrderStatus::Pending | OrderStatus::Cancelled)
    }

    /// Calendar date this order belongs to, in the system's local timezone.
    pub fn business_date(&self) -> NaiveDate {
        self.created_at.with_timezone(&Local).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order_with_status(status: OrderStatus) -> Order {
        Order {
            id: Uuid::new_v4(),
            status,
            total_in_paise: 19900,
            created_at: Utc::now(),
            items: vec![],
        }
    }

    #[test]
    fn test_realized_statuses() {
        assert!(!order_with_status(OrderStatus::Pending).is_realized());
        assert!(!order_with_status(OrderStatus::Cancelled).is_realized());
        assert!(order_with_status(OrderStatus::Confirmed).is_realized());
        assert!(order_with_status(OrderStatus::Shipped).is_realized());
        assert!(order_with_status(OrderStatus::Delivered).is_realized());
    }

    #[test]
    fn test_business_date_uses_local_calendar() {
        let local_noon = Local
            .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .single()
            .unwrap();
        let order = Order {
            id: Uuid::new_v4(),
            status: OrderStatus::Confirmed,
            total_in_paise: 0,
            created_at: local_noon.with_timezone(&Utc),
            items: vec![],
        };
        assert_eq!(
            order.business_date(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }
}
