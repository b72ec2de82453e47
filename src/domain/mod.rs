//! Read-model types consumed from the storefront database.

pub mod order;
pub mod product;

pub use order::{Order, OrderItem, OrderStatus, ProductSnapshot};
pub use product::Product;
