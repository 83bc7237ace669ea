//! Unified read-only access to orders.

use std::fmt::Debug;

use crate::{
    db_types::Order,
    sfe_api::{
        errors::OrderFlowError,
        order_objects::{OrderDetail, OrderSummary},
    },
    traits::OrderManagement,
};

/// The `OrderQueryApi` provides the read-only views over orders: the list view and the per-order detail view.
pub struct OrderQueryApi<B> {
    db: B,
}

impl<B: Debug> Debug for OrderQueryApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderQueryApi ({:?})", self.db)
    }
}

impl<B> OrderQueryApi<B>
where B: OrderManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Fetches the order list view, newest first.
    pub async fn order_summaries(&self) -> Result<Vec<OrderSummary>, OrderFlowError> {
        Ok(self.db.fetch_order_summaries().await?)
    }

    /// Fetches the order record for the given id. If no order exists, `None` is returned.
    pub async fn order_by_id(&self, order_id: i64) -> Result<Option<Order>, OrderFlowError> {
        Ok(self.db.fetch_order_by_id(order_id).await?)
    }

    /// Assembles the full view of an order: its line items, its payment ledger, and the balances derived from them.
    /// If no order exists, `None` is returned.
    pub async fn order_detail(&self, order_id: i64) -> Result<Option<OrderDetail>, OrderFlowError> {
        let order = match self.db.fetch_order_by_id(order_id).await? {
            Some(order) => order,
            None => return Ok(None),
        };
        let items = self.db.fetch_order_items(order_id).await?;
        let payments = self.db.fetch_payments_for_order(order_id).await?;
        Ok(Some(OrderDetail::assemble(order, items, payments)))
    }
}
