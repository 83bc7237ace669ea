use log::debug;
use sqlx::SqliteConnection;
use storefront_common::Cents;

use crate::{
    db_types::{NewOrder, NewOrderItem, Order, OrderItem, OrderStatusType},
    order_objects::OrderSummary,
    traits::ShopDatabaseError,
};

/// Inserts a new order row using the given connection. This is not atomic on its own. Embed this call inside a
/// transaction together with [`insert_order_items`] and pass `&mut *tx` as the connection argument — an order must
/// never become visible without its line items.
pub async fn insert_order(order: &NewOrder, conn: &mut SqliteConnection) -> Result<Order, ShopDatabaseError> {
    let order = sqlx::query_as(
        r#"
            INSERT INTO orders (customer_id, status, created_at) VALUES ($1, $2, $3)
            RETURNING *;
        "#,
    )
    .bind(order.customer_id)
    .bind(OrderStatusType::New.to_string())
    .bind(order.created_at)
    .fetch_one(conn)
    .await?;
    Ok(order)
}

/// Inserts the line items for an order. The order row must already exist.
pub async fn insert_order_items(
    order_id: i64,
    items: &[NewOrderItem],
    conn: &mut SqliteConnection,
) -> Result<Vec<OrderItem>, ShopDatabaseError> {
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        let row: OrderItem = sqlx::query_as(
            r#"
                INSERT INTO order_items (order_id, product_id, product_name, quantity, unit_price_cents)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *;
            "#,
        )
        .bind(order_id)
        .bind(item.product_id)
        .bind(item.product_name.clone())
        .bind(item.quantity)
        .bind(item.unit_price_cents)
        .fetch_one(&mut *conn)
        .await?;
        result.push(row);
    }
    debug!("📝️ {} line items inserted for order #{order_id}", result.len());
    Ok(result)
}

/// Returns the entry in the orders table for the corresponding `order_id`
pub async fn fetch_order_by_id(
    order_id: i64,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, ShopDatabaseError> {
    let order = sqlx::query_as("SELECT * FROM orders WHERE id = $1").bind(order_id).fetch_optional(conn).await?;
    Ok(order)
}

/// Returns the line items for the given order, in insertion order.
pub async fn fetch_order_items(
    order_id: i64,
    conn: &mut SqliteConnection,
) -> Result<Vec<OrderItem>, ShopDatabaseError> {
    let items = sqlx::query_as("SELECT * FROM order_items WHERE order_id = $1 ORDER BY id")
        .bind(order_id)
        .fetch_all(conn)
        .await?;
    Ok(items)
}

/// The order total, recomputed from the line items on every call. It is deliberately never cached on the order row,
/// so it cannot drift from the items.
pub async fn order_total(order_id: i64, conn: &mut SqliteConnection) -> Result<Cents, ShopDatabaseError> {
    let total: Cents = sqlx::query_scalar(
        "SELECT COALESCE(SUM(quantity * unit_price_cents), 0) FROM order_items WHERE order_id = $1",
    )
    .bind(order_id)
    .fetch_one(conn)
    .await?;
    Ok(total)
}

/// Fetches the order list view: one row per order with the customer name joined in and the total computed from the
/// line items, newest first.
pub async fn fetch_order_summaries(conn: &mut SqliteConnection) -> Result<Vec<OrderSummary>, ShopDatabaseError> {
    let summaries = sqlx::query_as(
        r#"
        SELECT
            o.id as id,
            o.customer_id as customer_id,
            COALESCE(c.name, '') as customer_name,
            o.status as status,
            o.created_at as created_at,
            COALESCE(SUM(oi.quantity * oi.unit_price_cents), 0) as total_cents
        FROM orders o
        LEFT JOIN customers c ON o.customer_id = c.id
        LEFT JOIN order_items oi ON o.id = oi.order_id
        GROUP BY o.id, o.customer_id, c.name, o.status, o.created_at
        ORDER BY o.created_at DESC"#,
    )
    .fetch_all(conn)
    .await?;
    Ok(summaries)
}

pub(crate) async fn update_order_status(
    id: i64,
    status: OrderStatusType,
    conn: &mut SqliteConnection,
) -> Result<Order, ShopDatabaseError> {
    let status = status.to_string();
    let result: Option<Order> =
        sqlx::query_as("UPDATE orders SET status = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2 RETURNING *")
            .bind(status)
            .bind(id)
            .fetch_optional(conn)
            .await?;
    result.ok_or(ShopDatabaseError::OrderNotFound(id))
}
