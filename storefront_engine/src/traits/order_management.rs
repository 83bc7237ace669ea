use storefront_common::Cents;

use crate::{
    db_types::{Order, OrderItem, Payment},
    order_objects::OrderSummary,
    traits::ShopDatabaseError,
};

/// Read access to orders, their line items and their payment ledgers.
#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    async fn fetch_order_by_id(&self, order_id: i64) -> Result<Option<Order>, ShopDatabaseError>;

    /// Fetches the line items for an order, in insertion order.
    async fn fetch_order_items(&self, order_id: i64) -> Result<Vec<OrderItem>, ShopDatabaseError>;

    /// Fetches the payment ledger for an order, oldest first.
    async fn fetch_payments_for_order(&self, order_id: i64) -> Result<Vec<Payment>, ShopDatabaseError>;

    /// The order total, recomputed from the line items. Zero if the order has no items (which a well-formed order
    /// never has).
    async fn order_total(&self, order_id: i64) -> Result<Cents, ShopDatabaseError>;

    /// The sum of all payments recorded against the order. Zero if there are none.
    async fn total_paid_for_order(&self, order_id: i64) -> Result<Cents, ShopDatabaseError>;

    /// The order list view: every order with its customer name and computed total, newest first.
    async fn fetch_order_summaries(&self) -> Result<Vec<OrderSummary>, ShopDatabaseError>;
}
