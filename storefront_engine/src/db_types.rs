use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use log::error;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use storefront_common::Cents;
use thiserror::Error;

//--------------------------------------       Product       ---------------------------------------------------------
/// A catalog entry.
///
/// Products are read-only to the engine; the catalog is maintained elsewhere and prices change under our feet, which
/// is why orders copy the unit price into their line items at creation time.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price_cents: Cents,
    pub active: bool,
}

//--------------------------------------   OrderStatusType     -------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
pub enum OrderStatusType {
    /// The order has been created and payments are still outstanding.
    New,
    /// Cumulative payments have met or exceeded the order total.
    Paid,
    /// The order was cancelled by an administrative action. The engine never sets this status itself, but it must
    /// refuse payments against it.
    Cancelled,
}

impl Display for OrderStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatusType::New => write!(f, "New"),
            OrderStatusType::Paid => write!(f, "Paid"),
            OrderStatusType::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl From<String> for OrderStatusType {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|_| {
            error!("Invalid order status: {value}. But this conversion cannot fail. Defaulting to New");
            OrderStatusType::New
        })
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid order status: {0}")]
pub struct ConversionError(String);

impl FromStr for OrderStatusType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Self::New),
            "Paid" => Ok(Self::Paid),
            "Cancelled" => Ok(Self::Cancelled),
            s => Err(ConversionError(format!("Invalid order status: {s}"))),
        }
    }
}

//--------------------------------------        Order        ---------------------------------------------------------
/// An order as stored. The total is never kept on this record; it is always recomputed from the line items so that it
/// cannot drift from them.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub status: OrderStatusType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//--------------------------------------       NewOrder      ---------------------------------------------------------
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: i64,
    /// The time the order was accepted
    pub created_at: DateTime<Utc>,
}

impl NewOrder {
    pub fn new(customer_id: i64) -> Self {
        Self { customer_id, created_at: Utc::now() }
    }
}

//--------------------------------------      OrderItem      ---------------------------------------------------------
/// A priced order line. The product name and unit price are snapshots of the catalog at the moment the order was
/// created; later catalog changes never affect them. Line items are immutable once the order exists.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: Cents,
}

impl OrderItem {
    pub fn subtotal(&self) -> Cents {
        self.unit_price_cents * self.quantity
    }
}

//--------------------------------------     NewOrderItem    ---------------------------------------------------------
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: Cents,
}

impl NewOrderItem {
    /// Builds a line item from a catalog entry, snapshotting its current name and price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity,
            unit_price_cents: product.price_cents,
        }
    }

    pub fn subtotal(&self) -> Cents {
        self.unit_price_cents * self.quantity
    }
}

//--------------------------------------    PaymentMethod    ---------------------------------------------------------
/// How a payment was made. PIX, CARD and BOLETO are the conventional values, but the set is open; the only
/// requirement is that the method is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(transparent)]
#[serde(try_from = "String")]
pub struct PaymentMethod(String);

#[derive(Debug, Clone, Error)]
#[error("Payment method cannot be empty")]
pub struct EmptyPaymentMethod;

impl FromStr for PaymentMethod {
    type Err = EmptyPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let method = s.trim();
        if method.is_empty() {
            Err(EmptyPaymentMethod)
        } else {
            Ok(Self(method.to_string()))
        }
    }
}

impl TryFrom<String> for PaymentMethod {
    type Error = EmptyPaymentMethod;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PaymentMethod {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//--------------------------------------       Payment       ---------------------------------------------------------
/// A ledger entry. Payments are append-only and immutable once recorded; there is no edit or void operation.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub method: PaymentMethod,
    pub amount_cents: Cents,
    /// The time the payment was accepted
    pub paid_at: DateTime<Utc>,
}

//--------------------------------------      NewPayment     ---------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPayment {
    pub order_id: i64,
    pub method: PaymentMethod,
    pub amount_cents: Cents,
}

impl NewPayment {
    pub fn new(order_id: i64, method: PaymentMethod, amount_cents: Cents) -> Self {
        Self { order_id, method, amount_cents }
    }
}
