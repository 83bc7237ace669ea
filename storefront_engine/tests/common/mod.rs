#![allow(dead_code)]

use storefront_common::Cents;
use storefront_engine::{
    db_types::NewPayment,
    events::EventProducers,
    order_objects::OrderItemRequest,
    test_utils::prepare_env::{prepare_test_env, random_db_path},
    OrderFlowApi, SqliteDatabase,
};

pub async fn new_test_db() -> SqliteDatabase {
    let url = random_db_path();
    prepare_test_env(&url).await;
    SqliteDatabase::new_with_url(&url, 5).await.expect("Error creating database")
}

pub fn order_flow_api(db: &SqliteDatabase) -> OrderFlowApi<SqliteDatabase> {
    OrderFlowApi::new(db.clone(), EventProducers::default())
}

/// Puts a product into the catalog, standing in for the external catalog administration the engine does not own.
pub async fn seed_product(db: &SqliteDatabase, id: i64, name: &str, price_cents: i64, active: bool) {
    sqlx::query("INSERT INTO products (id, name, category, price_cents, active) VALUES ($1, $2, 'Testes', $3, $4)")
        .bind(id)
        .bind(name)
        .bind(price_cents)
        .bind(active)
        .execute(db.pool())
        .await
        .expect("Error seeding product");
}

/// Changes a catalog price behind the engine's back, as the external catalog is free to do at any time.
pub async fn set_product_price(db: &SqliteDatabase, id: i64, price_cents: i64) {
    sqlx::query("UPDATE products SET price_cents = $1 WHERE id = $2")
        .bind(price_cents)
        .bind(id)
        .execute(db.pool())
        .await
        .expect("Error updating product price");
}

/// Cancels an order directly in the store, standing in for the administrative path that owns cancellation.
pub async fn cancel_order(db: &SqliteDatabase, order_id: i64) {
    sqlx::query("UPDATE orders SET status = 'Cancelled', updated_at = CURRENT_TIMESTAMP WHERE id = $1")
        .bind(order_id)
        .execute(db.pool())
        .await
        .expect("Error cancelling order");
}

pub async fn count_rows(db: &SqliteDatabase, table: &str) -> i64 {
    let query = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar(&query).fetch_one(db.pool()).await.expect("Error counting rows")
}

pub fn items(requested: &[(i64, i64)]) -> Vec<OrderItemRequest> {
    requested.iter().map(|&(product_id, quantity)| OrderItemRequest { product_id, quantity }).collect()
}

pub fn pix_payment(order_id: i64, amount_cents: i64) -> NewPayment {
    NewPayment::new(order_id, "PIX".parse().unwrap(), Cents::from(amount_cents))
}
