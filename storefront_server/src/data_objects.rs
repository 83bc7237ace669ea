use std::fmt::Display;

use serde::{Deserialize, Serialize};
use storefront_common::Cents;
use storefront_engine::{
    db_types::{NewPayment, OrderStatusType, PaymentMethod},
    order_objects::{OrderItemRequest, PlacedOrder},
};

use crate::errors::ServerError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: i64,
    #[serde(default)]
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub order_id: i64,
    pub method: String,
    pub amount_cents: i64,
}

impl TryFrom<CreatePaymentRequest> for NewPayment {
    type Error = ServerError;

    fn try_from(value: CreatePaymentRequest) -> Result<Self, Self::Error> {
        let method = PaymentMethod::try_from(value.method)
            .map_err(|e| ServerError::InvalidRequestBody(e.to_string()))?;
        Ok(NewPayment::new(value.order_id, method, Cents::from(value.amount_cents)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreatedResponse {
    pub order_id: i64,
    pub total_cents: Cents,
    pub status: OrderStatusType,
}

impl From<PlacedOrder> for OrderCreatedResponse {
    fn from(placed: PlacedOrder) -> Self {
        Self { order_id: placed.order.id, total_cents: placed.total_cents, status: placed.order.status }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failure<S: Display>(message: S) -> Self {
        Self { success: false, message: message.to_string() }
    }
}
