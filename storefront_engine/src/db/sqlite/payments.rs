use chrono::Utc;
use sqlx::SqliteConnection;
use storefront_common::Cents;

use crate::{
    db_types::{NewPayment, Payment},
    traits::ShopDatabaseError,
};

/// Appends a payment to the ledger. Ledger entries are immutable once written; there is no update or delete
/// counterpart to this function.
pub async fn insert_payment(payment: &NewPayment, conn: &mut SqliteConnection) -> Result<Payment, ShopDatabaseError> {
    let payment = sqlx::query_as(
        r#"
            INSERT INTO payments (order_id, method, amount_cents, paid_at) VALUES ($1, $2, $3, $4)
            RETURNING *;
        "#,
    )
    .bind(payment.order_id)
    .bind(payment.method.clone())
    .bind(payment.amount_cents)
    .bind(Utc::now())
    .fetch_one(conn)
    .await?;
    Ok(payment)
}

/// The sum of all payments recorded against the order. Zero if there are none.
pub async fn total_paid(order_id: i64, conn: &mut SqliteConnection) -> Result<Cents, ShopDatabaseError> {
    let total: Cents =
        sqlx::query_scalar("SELECT COALESCE(SUM(amount_cents), 0) FROM payments WHERE order_id = $1")
            .bind(order_id)
            .fetch_one(conn)
            .await?;
    Ok(total)
}

pub async fn fetch_payments_for_order(
    order_id: i64,
    conn: &mut SqliteConnection,
) -> Result<Vec<Payment>, ShopDatabaseError> {
    let payments = sqlx::query_as("SELECT * FROM payments WHERE order_id = $1 ORDER BY id")
        .bind(order_id)
        .fetch_all(conn)
        .await?;
    Ok(payments)
}
