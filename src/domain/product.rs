//! Live catalog view, consumed read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price_in_paise: i64,
    /// Current unit cost of goods. Live: editing it retroactively changes
    /// the computed COGS of every past order containing this product.
    pub cost_price_in_paise: i64,
    pub image_urls: Vec<String>,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
