use crate::{db_types::Product, order_objects::ProductQueryFilter, traits::ShopDatabaseError};

/// Read access to the product catalog.
///
/// The catalog is an external, time-varying resource as far as the engine is concerned: it is consulted exactly once
/// per order line, at order creation time, and never again for an existing order.
#[allow(async_fn_in_trait)]
pub trait CatalogManagement {
    /// Fetches the product with the given id, active or not.
    async fn fetch_product(&self, product_id: i64) -> Result<Option<Product>, ShopDatabaseError>;

    /// Fetches the product with the given id, but only if it is active. Inactive and nonexistent products are
    /// indistinguishable through this call.
    async fn fetch_active_product(&self, product_id: i64) -> Result<Option<Product>, ShopDatabaseError>;

    /// Fetches products according to the criteria in the given filter, ordered by name.
    async fn search_products(&self, query: ProductQueryFilter) -> Result<Vec<Product>, ShopDatabaseError>;
}
