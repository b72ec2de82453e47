//! sqlx-backed loads and saves over the storefront database.

use std::collections::HashMap;

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Order, OrderItem, Product, ProductSnapshot};
use crate::pnl::{OverrideKind, OverrideStore};
use crate::Result;

#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    order_id: Uuid,
    product_id: Uuid,
    product_name_snapshot: String,
    image_snapshot: Option<String>,
    quantity: i64,
    price_at_purchase: i64,
}

/// Full order history with items reassembled from their snapshot rows.
pub async fn list_orders(pool: &PgPool) -> Result<Vec<Order>> {
    let mut orders = sqlx::query_as::<_, Order>(
        "SELECT id, status, total_in_paise, created_at FROM orders ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    let item_rows = sqlx::query_as::<_, OrderItemRow>(
        "SELECT order_id, product_id, product_name_snapshot, image_snapshot, quantity, price_at_purchase FROM order_items",
    )
    .fetch_all(pool)
    .await?;

    let mut items_by_order: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();
    for row in item_rows {
        items_by_order.entry(row.order_id).or_default().push(OrderItem {
            product: ProductSnapshot {
                id: row.product_id,
                name: row.product_name_snapshot,
                image: row.image_snapshot,
                price_in_paise: row.price_at_purchase,
            },
            quantity: row.quantity,
        });
    }
    for order in &mut orders {
        if let Some(items) = items_by_order.remove(&order.id) {
            order.items = items;
        }
    }
    Ok(orders)
}

pub async fn list_products(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, price_in_paise, cost_price_in_paise, image_urls, stock, created_at, updated_at FROM products",
    )
    .fetch_all(pool)
    .await?;
    Ok(products)
}

pub async fn load_overrides(pool: &PgPool) -> Result<OverrideStore> {
    let rows: Vec<(String, NaiveDate, i64)> =
        sqlx::query_as("SELECT kind, date, amount_in_rupees FROM pnl_overrides")
            .fetch_all(pool)
            .await?;

    let mut store = OverrideStore::new();
    for (kind, date, amount) in rows {
        match OverrideKind::parse(&kind) {
            Some(kind) => store.set(kind, date, amount),
            None => tracing::warn!(kind = %kind, "skipping override row with unknown kind"),
        }
    }
    Ok(store)
}

/// Upserts a single date key; last write wins per `(kind, date)`.
pub async fn save_override(
    pool: &PgPool,
    kind: OverrideKind,
    date: NaiveDate,
    amount_in_rupees: i64,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO pnl_overrides (kind, date, amount_in_rupees) VALUES ($1, $2, $3) ON CONFLICT (kind, date) DO UPDATE SET amount_in_rupees = EXCLUDED.amount_in_rupees",
    )
    .bind(kind.as_str())
    .bind(date)
    .bind(amount_in_rupees)
    .execute(pool)
    .await?;
    Ok(())
}
