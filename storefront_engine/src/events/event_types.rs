use serde::{Deserialize, Serialize};

use crate::db_types::Order;

/// Emitted when cumulative payments meet or exceed an order's total and the order transitions to `Paid`. This fires
/// at most once per order; settlement is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPaidEvent {
    pub order: Order,
}

impl OrderPaidEvent {
    pub fn new(order: Order) -> Self {
        Self { order }
    }
}
