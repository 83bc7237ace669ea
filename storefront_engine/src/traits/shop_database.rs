use thiserror::Error;

use crate::{
    db_types::{NewOrder, NewOrderItem, NewPayment, Order},
    traits::{CatalogManagement, OrderManagement, SettlementResult},
};

/// This trait defines the highest level of behaviour for backends supporting the storefront engine.
///
/// This behaviour includes:
/// * Persisting a priced order and its line items as a single unit.
/// * Handling incoming payments and the settlement decision that follows each one.
#[allow(async_fn_in_trait)]
pub trait ShopDatabase: Clone + CatalogManagement + OrderManagement {
    /// The URL of the database
    fn url(&self) -> &str;

    /// Takes a new order and its line items and, in a single atomic transaction, stores them all.
    ///
    /// The slice of items must not be empty: an order with zero line items must never reach the store. If any item
    /// insertion fails, the order row must not survive either — there is no observable state in which an order exists
    /// without its items.
    async fn insert_full_order(&self, order: NewOrder, items: &[NewOrderItem]) -> Result<Order, ShopDatabaseError>;

    /// Takes a new payment and, in a single atomic transaction:
    /// * checks that the order exists and is still payable (`New`). Payments against `Paid` orders fail with
    ///   [`ShopDatabaseError::OrderAlreadySettled`], and against `Cancelled` orders with
    ///   [`ShopDatabaseError::OrderCancelled`]; in both cases the ledger is left untouched.
    /// * appends the payment to the ledger.
    /// * recomputes the cumulative amount paid and the order total, and marks the order `Paid` if the payments now
    ///   cover it.
    ///
    /// The transaction is the per-order serialization point: the sum-and-settle step must not interleave with another
    /// payment registration on the same order, or a `New` → `Paid` transition can be silently missed.
    ///
    /// Returns the recorded payment together with the post-reconciliation state of the order.
    async fn process_new_payment(&self, payment: NewPayment) -> Result<SettlementResult, ShopDatabaseError>;

    /// Closes the database connection.
    async fn close(&mut self) -> Result<(), ShopDatabaseError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Error)]
pub enum ShopDatabaseError {
    #[error("We have an internal database engine error (configuration/uptime etc.): {0}")]
    DatabaseError(String),
    #[error("The requested order {0} does not exist")]
    OrderNotFound(i64),
    #[error("Order {0} is already paid in full")]
    OrderAlreadySettled(i64),
    #[error("Order {0} has been cancelled and cannot accept payments")]
    OrderCancelled(i64),
    #[error("Orders must contain at least one line item")]
    EmptyOrder,
}

impl From<sqlx::Error> for ShopDatabaseError {
    fn from(e: sqlx::Error) -> Self {
        ShopDatabaseError::DatabaseError(e.to_string())
    }
}
