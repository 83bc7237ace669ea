//! Unified read-only access to the product catalog.

use std::fmt::Debug;

use crate::{
    db_types::Product,
    sfe_api::{errors::OrderFlowError, order_objects::ProductQueryFilter},
    traits::CatalogManagement,
};

/// The `CatalogApi` provides read access to the product catalog for browsing and filtering.
pub struct CatalogApi<B> {
    db: B,
}

impl<B: Debug> Debug for CatalogApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CatalogApi ({:?})", self.db)
    }
}

impl<B> CatalogApi<B>
where B: CatalogManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Fetches products matching the given filter, ordered by name.
    pub async fn products(&self, query: ProductQueryFilter) -> Result<Vec<Product>, OrderFlowError> {
        Ok(self.db.search_products(query).await?)
    }

    /// Fetches a single product by id, whether or not it is active.
    pub async fn product_by_id(&self, product_id: i64) -> Result<Option<Product>, OrderFlowError> {
        Ok(self.db.fetch_product(product_id).await?)
    }
}
