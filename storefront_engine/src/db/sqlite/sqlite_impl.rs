//! `SqliteDatabase` is the concrete SQLite implementation of a storefront engine backend.
//!
//! It implements all the traits defined in the [`crate::traits`] module. The write paths
//! ([`ShopDatabase::insert_full_order`] and [`ShopDatabase::process_new_payment`]) each run inside a single
//! transaction; the payment path in particular relies on that transaction as its per-order serialization point.
use std::fmt::Debug;

use log::*;
use sqlx::SqlitePool;
use storefront_common::Cents;

use super::{db_url, new_pool, orders, payments, products};
use crate::{
    db_types::{NewOrder, NewOrderItem, NewPayment, Order, OrderItem, OrderStatusType, Payment, Product},
    order_objects::{OrderSummary, ProductQueryFilter},
    traits::{CatalogManagement, OrderManagement, SettlementResult, ShopDatabase, ShopDatabaseError},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl ShopDatabase for SqliteDatabase {
    fn url(&self) -> &str {
        self.url.as_str()
    }

    async fn insert_full_order(&self, order: NewOrder, items: &[NewOrderItem]) -> Result<Order, ShopDatabaseError> {
        if items.is_empty() {
            return Err(ShopDatabaseError::EmptyOrder);
        }
        let mut tx = self.pool.begin().await?;
        let order = orders::insert_order(&order, &mut tx).await?;
        orders::insert_order_items(order.id, items, &mut tx).await?;
        tx.commit().await?;
        debug!("🗃️ Order #{} has been saved in the DB with {} line items", order.id, items.len());
        Ok(order)
    }

    /// Takes a new payment, and in a single atomic transaction,
    /// * verifies that the order exists and is still `New`. `Paid` and `Cancelled` orders reject the payment, and
    ///   the rollback leaves the ledger untouched.
    /// * appends the payment to the ledger.
    /// * recomputes the cumulative amount paid and the order total, and marks the order `Paid` if the payments now
    ///   cover it. Marking an already-covered order `Paid` again is a no-op at the row level, so the transition fires
    ///   exactly once.
    ///
    /// Once the transaction commits, the ledger entry is durable and irrevocable.
    async fn process_new_payment(&self, payment: NewPayment) -> Result<SettlementResult, ShopDatabaseError> {
        let mut tx = self.pool.begin().await?;
        let order = orders::fetch_order_by_id(payment.order_id, &mut tx)
            .await?
            .ok_or(ShopDatabaseError::OrderNotFound(payment.order_id))?;
        match order.status {
            OrderStatusType::Paid => return Err(ShopDatabaseError::OrderAlreadySettled(order.id)),
            OrderStatusType::Cancelled => return Err(ShopDatabaseError::OrderCancelled(order.id)),
            OrderStatusType::New => {},
        }
        let payment = payments::insert_payment(&payment, &mut tx).await?;
        trace!("🗃️ Payment #{} of {} appended for order #{}", payment.id, payment.amount_cents, order.id);
        let paid_cents = payments::total_paid(order.id, &mut tx).await?;
        let total_cents = orders::order_total(order.id, &mut tx).await?;
        let order = if paid_cents >= total_cents {
            let order = orders::update_order_status(order.id, OrderStatusType::Paid, &mut tx).await?;
            trace!("🗃️ Order #{} settled: {paid_cents} received against a total of {total_cents}", order.id);
            order
        } else {
            trace!("🗃️ Order #{} has {} outstanding", order.id, total_cents - paid_cents);
            order
        };
        tx.commit().await?;
        debug!("🗃️ Payment #{} recorded against order #{}. Order status is {}", payment.id, order.id, order.status);
        Ok(SettlementResult { payment, order, total_cents, paid_cents })
    }

    async fn close(&mut self) -> Result<(), ShopDatabaseError> {
        self.pool.close().await;
        Ok(())
    }
}

impl CatalogManagement for SqliteDatabase {
    async fn fetch_product(&self, product_id: i64) -> Result<Option<Product>, ShopDatabaseError> {
        let mut conn = self.pool.acquire().await?;
        products::fetch_product_by_id(product_id, &mut conn).await
    }

    async fn fetch_active_product(&self, product_id: i64) -> Result<Option<Product>, ShopDatabaseError> {
        let mut conn = self.pool.acquire().await?;
        products::fetch_active_product(product_id, &mut conn).await
    }

    async fn search_products(&self, query: ProductQueryFilter) -> Result<Vec<Product>, ShopDatabaseError> {
        let mut conn = self.pool.acquire().await?;
        products::search_products(query, &mut conn).await
    }
}

impl OrderManagement for SqliteDatabase {
    async fn fetch_order_by_id(&self, order_id: i64) -> Result<Option<Order>, ShopDatabaseError> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_order_by_id(order_id, &mut conn).await
    }

    async fn fetch_order_items(&self, order_id: i64) -> Result<Vec<OrderItem>, ShopDatabaseError> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_order_items(order_id, &mut conn).await
    }

    async fn fetch_payments_for_order(&self, order_id: i64) -> Result<Vec<Payment>, ShopDatabaseError> {
        let mut conn = self.pool.acquire().await?;
        payments::fetch_payments_for_order(order_id, &mut conn).await
    }

    async fn order_total(&self, order_id: i64) -> Result<Cents, ShopDatabaseError> {
        let mut conn = self.pool.acquire().await?;
        orders::order_total(order_id, &mut conn).await
    }

    async fn total_paid_for_order(&self, order_id: i64) -> Result<Cents, ShopDatabaseError> {
        let mut conn = self.pool.acquire().await?;
        payments::total_paid(order_id, &mut conn).await
    }

    async fn fetch_order_summaries(&self) -> Result<Vec<OrderSummary>, ShopDatabaseError> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_order_summaries(&mut conn).await
    }
}

impl SqliteDatabase {
    /// Creates a new database API object using the URL from the environment (or the default).
    pub async fn new() -> Result<Self, ShopDatabaseError> {
        let url = db_url();
        SqliteDatabase::new_with_url(url.as_str(), 25).await
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, ShopDatabaseError> {
        trace!("Creating new database connection pool with url {url}");
        let pool = new_pool(url, max_connections).await?;
        let url = url.to_string();
        Ok(Self { url, pool })
    }

    /// Brings the schema up to date, creating and seeding the tables on a fresh database.
    pub async fn run_migrations(&self) -> Result<(), ShopDatabaseError> {
        sqlx::migrate!("./src/db/sqlite/migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ShopDatabaseError::DatabaseError(e.to_string()))?;
        info!("🗃️ Database migrations complete");
        Ok(())
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
