use thiserror::Error;

use crate::traits::ShopDatabaseError;

/// Errors surfaced to callers of the engine APIs.
///
/// The first four variants are input validation failures, the next three are business-rule rejections, and
/// `DatabaseError` is a fatal persistence failure that is never swallowed or retried inside the engine.
#[derive(Debug, Clone, Error)]
pub enum OrderFlowError {
    #[error("Order must contain at least one item")]
    EmptyOrder,
    #[error("Quantity must be greater than zero for product {0}")]
    InvalidQuantity(i64),
    #[error("Product {0} not found or is inactive")]
    ProductUnavailable(i64),
    #[error("Payment amount must be greater than zero")]
    InvalidAmount,
    #[error("Order {0} not found")]
    OrderNotFound(i64),
    #[error("Order {0} is already paid")]
    OrderAlreadySettled(i64),
    #[error("Order {0} has been cancelled and cannot accept payments")]
    OrderCancelled(i64),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<ShopDatabaseError> for OrderFlowError {
    fn from(e: ShopDatabaseError) -> Self {
        match e {
            ShopDatabaseError::OrderNotFound(id) => Self::OrderNotFound(id),
            ShopDatabaseError::OrderAlreadySettled(id) => Self::OrderAlreadySettled(id),
            ShopDatabaseError::OrderCancelled(id) => Self::OrderCancelled(id),
            ShopDatabaseError::EmptyOrder => Self::EmptyOrder,
            ShopDatabaseError::DatabaseError(msg) => Self::DatabaseError(msg),
        }
    }
}
