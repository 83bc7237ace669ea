use mockall::mock;
use storefront_common::Cents;
use storefront_engine::{
    db_types::{NewOrder, NewOrderItem, NewPayment, Order, OrderItem, Payment, Product},
    order_objects::{OrderSummary, ProductQueryFilter},
    traits::{CatalogManagement, OrderManagement, SettlementResult, ShopDatabase, ShopDatabaseError},
};

mock! {
    pub Catalog {}
    impl CatalogManagement for Catalog {
        async fn fetch_product(&self, product_id: i64) -> Result<Option<Product>, ShopDatabaseError>;
        async fn fetch_active_product(&self, product_id: i64) -> Result<Option<Product>, ShopDatabaseError>;
        async fn search_products(&self, query: ProductQueryFilter) -> Result<Vec<Product>, ShopDatabaseError>;
    }
}

mock! {
    pub OrderManager {}
    impl OrderManagement for OrderManager {
        async fn fetch_order_by_id(&self, order_id: i64) -> Result<Option<Order>, ShopDatabaseError>;
        async fn fetch_order_items(&self, order_id: i64) -> Result<Vec<OrderItem>, ShopDatabaseError>;
        async fn fetch_payments_for_order(&self, order_id: i64) -> Result<Vec<Payment>, ShopDatabaseError>;
        async fn order_total(&self, order_id: i64) -> Result<Cents, ShopDatabaseError>;
        async fn total_paid_for_order(&self, order_id: i64) -> Result<Cents, ShopDatabaseError>;
        async fn fetch_order_summaries(&self) -> Result<Vec<OrderSummary>, ShopDatabaseError>;
    }
}

// The full backend, for exercising the write paths through the HTTP layer.
mock! {
    pub Backend {}
    impl Clone for Backend {
        fn clone(&self) -> Self;
    }
    impl CatalogManagement for Backend {
        async fn fetch_product(&self, product_id: i64) -> Result<Option<Product>, ShopDatabaseError>;
        async fn fetch_active_product(&self, product_id: i64) -> Result<Option<Product>, ShopDatabaseError>;
        async fn search_products(&self, query: ProductQueryFilter) -> Result<Vec<Product>, ShopDatabaseError>;
    }
    impl OrderManagement for Backend {
        async fn fetch_order_by_id(&self, order_id: i64) -> Result<Option<Order>, ShopDatabaseError>;
        async fn fetch_order_items(&self, order_id: i64) -> Result<Vec<OrderItem>, ShopDatabaseError>;
        async fn fetch_payments_for_order(&self, order_id: i64) -> Result<Vec<Payment>, ShopDatabaseError>;
        async fn order_total(&self, order_id: i64) -> Result<Cents, ShopDatabaseError>;
        async fn total_paid_for_order(&self, order_id: i64) -> Result<Cents, ShopDatabaseError>;
        async fn fetch_order_summaries(&self) -> Result<Vec<OrderSummary>, ShopDatabaseError>;
    }
    impl ShopDatabase for Backend {
        fn url(&self) -> &'static str;
        async fn insert_full_order(&self, order: NewOrder, items: &[NewOrderItem]) -> Result<Order, ShopDatabaseError>;
        async fn process_new_payment(&self, payment: NewPayment) -> Result<SettlementResult, ShopDatabaseError>;
        async fn close(&mut self) -> Result<(), ShopDatabaseError>;
    }
}
