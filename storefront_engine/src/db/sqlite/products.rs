use log::trace;
use sqlx::{QueryBuilder, SqliteConnection};

use crate::{db_types::Product, order_objects::ProductQueryFilter, traits::ShopDatabaseError};

pub async fn fetch_product_by_id(
    product_id: i64,
    conn: &mut SqliteConnection,
) -> Result<Option<Product>, ShopDatabaseError> {
    let product =
        sqlx::query_as("SELECT * FROM products WHERE id = $1").bind(product_id).fetch_optional(conn).await?;
    Ok(product)
}

/// Fetches the product with the given id only if it is active. An inactive product and a missing one look the same
/// through this call, which is exactly the distinction order placement is allowed to see.
pub async fn fetch_active_product(
    product_id: i64,
    conn: &mut SqliteConnection,
) -> Result<Option<Product>, ShopDatabaseError> {
    let product = sqlx::query_as("SELECT * FROM products WHERE id = $1 AND active = 1")
        .bind(product_id)
        .fetch_optional(conn)
        .await?;
    Ok(product)
}

/// Fetches products according to criteria specified in the `ProductQueryFilter`.
///
/// Resulting products are ordered by name.
pub async fn search_products(
    query: ProductQueryFilter,
    conn: &mut SqliteConnection,
) -> Result<Vec<Product>, ShopDatabaseError> {
    let mut builder = QueryBuilder::new(
        r#"
    SELECT * FROM products
    "#,
    );
    if !query.is_empty() {
        builder.push("WHERE ");
    }
    let mut where_clause = builder.separated(" AND ");
    if let Some(category) = query.category {
        where_clause.push("category = ");
        where_clause.push_bind_unseparated(category);
    }
    if let Some(active) = query.active {
        where_clause.push("active = ");
        where_clause.push_bind_unseparated(active);
    }
    if let Some(name) = query.name {
        where_clause.push("name LIKE ");
        where_clause.push_bind_unseparated(format!("%{name}%"));
    }
    builder.push(" ORDER BY name");

    trace!("🛍️ Executing query: {}", builder.sql());
    let query = builder.build_query_as::<Product>();
    let products = query.fetch_all(conn).await?;
    trace!("🛍️ Result of search_products: {} products", products.len());
    Ok(products)
}
