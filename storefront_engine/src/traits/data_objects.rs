use serde::Serialize;
use storefront_common::Cents;

use crate::db_types::{Order, OrderStatusType, Payment};

/// The outcome of a single payment registration: the ledger entry that was recorded, the post-reconciliation state of
/// the order, and the two figures the settlement decision was based on.
#[derive(Debug, Clone, Serialize)]
pub struct SettlementResult {
    pub payment: Payment,
    pub order: Order,
    pub total_cents: Cents,
    pub paid_cents: Cents,
}

impl SettlementResult {
    pub fn is_settled(&self) -> bool {
        self.order.status == OrderStatusType::Paid
    }

    /// The amount still outstanding. Overpayment is retained, so this never goes negative.
    pub fn remaining_cents(&self) -> Cents {
        if self.paid_cents >= self.total_cents {
            Cents::from(0)
        } else {
            self.total_cents - self.paid_cents
        }
    }
}
