use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_common::Cents;

use crate::db_types::{Order, OrderItem, OrderStatusType, Payment};

//--------------------------------------   OrderItemRequest  ---------------------------------------------------------
/// One line of an order placement request: which product, and how many.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: i64,
    pub quantity: i64,
}

//--------------------------------------     OrderSummary    ---------------------------------------------------------
/// One row of the order list view: the order fields with the customer name joined in and the total computed from the
/// line items.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub status: OrderStatusType,
    pub created_at: DateTime<Utc>,
    pub total_cents: Cents,
}

//--------------------------------------      PlacedOrder    ---------------------------------------------------------
/// Returned by [`crate::OrderFlowApi::place_order`]: the persisted order and the total that was computed from the
/// snapshotted line items.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedOrder {
    #[serde(flatten)]
    pub order: Order,
    pub total_cents: Cents,
}

//--------------------------------------      OrderDetail    ---------------------------------------------------------
/// The full view of a single order: its line items, its payment ledger, and the derived balances.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
    pub total_cents: Cents,
    pub paid_cents: Cents,
    pub remaining_cents: Cents,
}

impl OrderDetail {
    pub fn assemble(order: Order, items: Vec<OrderItem>, payments: Vec<Payment>) -> Self {
        let total_cents: Cents = items.iter().map(OrderItem::subtotal).sum();
        let paid_cents: Cents = payments.iter().map(|p| p.amount_cents).sum();
        let remaining_cents =
            if paid_cents >= total_cents { Cents::from(0) } else { total_cents - paid_cents };
        Self { order, items, payments, total_cents, paid_cents, remaining_cents }
    }
}

//--------------------------------------  ProductQueryFilter ---------------------------------------------------------
/// Filters for catalog searches. An empty filter matches every product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductQueryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Fuzzy match: products whose name _contains_ this string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ProductQueryFilter {
    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.active.is_none() && self.name.is_none()
    }
}
