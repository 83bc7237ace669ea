use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{NewOrder, NewOrderItem, NewPayment},
    events::{EventProducers, OrderPaidEvent},
    sfe_api::{
        errors::OrderFlowError,
        order_objects::{OrderItemRequest, PlacedOrder},
    },
    traits::{SettlementResult, ShopDatabase},
};

/// `OrderFlowApi` is the primary API for the two state-changing flows of the storefront: placing an order against the
/// catalog, and registering payments against an order until it settles.
pub struct OrderFlowApi<B> {
    db: B,
    producers: EventProducers,
}

impl<B> Debug for OrderFlowApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi")
    }
}

impl<B> OrderFlowApi<B> {
    pub fn new(db: B, producers: EventProducers) -> Self {
        Self { db, producers }
    }
}

impl<B> OrderFlowApi<B>
where B: ShopDatabase
{
    /// Place a new order for the given customer.
    ///
    /// Every requested line is validated before anything is persisted: the quantity must be at least one, and the
    /// product must exist in the catalog and be active. The first failing line aborts the whole request — partial
    /// orders are never created.
    ///
    /// Each line item captures the product's name and price at lookup time. This is the snapshot point: no other
    /// pricing source is ever consulted for this order again, so later catalog price changes cannot retroactively
    /// change what the customer owes.
    pub async fn place_order(
        &self,
        customer_id: i64,
        items: &[OrderItemRequest],
    ) -> Result<PlacedOrder, OrderFlowError> {
        if items.is_empty() {
            return Err(OrderFlowError::EmptyOrder);
        }
        let mut line_items = Vec::with_capacity(items.len());
        for item in items {
            if item.quantity <= 0 {
                return Err(OrderFlowError::InvalidQuantity(item.product_id));
            }
            let product = self
                .db
                .fetch_active_product(item.product_id)
                .await?
                .ok_or(OrderFlowError::ProductUnavailable(item.product_id))?;
            line_items.push(NewOrderItem::from_product(&product, item.quantity));
        }
        let total_cents = line_items.iter().map(NewOrderItem::subtotal).sum();
        let order = self.db.insert_full_order(NewOrder::new(customer_id), &line_items).await?;
        debug!(
            "🔄️📦️ Order #{} placed for customer {customer_id}. {} line items totalling {total_cents}",
            order.id,
            line_items.len()
        );
        Ok(PlacedOrder { order, total_cents })
    }

    /// Register a payment against an order.
    ///
    /// The ledger append and the settlement decision execute atomically with respect to other payments on the same
    /// order. The call succeeds for partial payments; once the cumulative amount covers the order total the order
    /// transitions to `Paid` and subscribed hooks are notified. Overpayment settles the order and the excess is
    /// retained without error.
    ///
    /// Payments against orders that are already `Paid` or `Cancelled` are rejected and leave the ledger untouched.
    /// Retried payments are *not* deduplicated — there is no idempotency key, so replaying a timed-out request
    /// records a second ledger entry.
    pub async fn register_payment(&self, payment: NewPayment) -> Result<SettlementResult, OrderFlowError> {
        if payment.amount_cents.value() <= 0 {
            return Err(OrderFlowError::InvalidAmount);
        }
        let order_id = payment.order_id;
        let result = self.db.process_new_payment(payment).await?;
        trace!("🔄️💰️ Payment #{} against order #{order_id} processed", result.payment.id);
        if result.is_settled() {
            self.call_order_paid_hook(&result).await;
            debug!(
                "🔄️💰️ Order #{order_id} is paid in full. {} received against a total of {}",
                result.paid_cents, result.total_cents
            );
        } else {
            debug!("🔄️💰️ Order #{order_id} still has {} outstanding", result.remaining_cents());
        }
        Ok(result)
    }

    async fn call_order_paid_hook(&self, result: &SettlementResult) {
        for emitter in &self.producers.order_paid_producer {
            debug!("🔄️📦️ Notifying order paid hook subscribers");
            let event = OrderPaidEvent::new(result.order.clone());
            emitter.publish_event(event).await;
        }
    }

    pub fn db(&self) -> &B {
        &self.db
    }

    pub fn db_mut(&mut self) -> &mut B {
        &mut self.db
    }
}
