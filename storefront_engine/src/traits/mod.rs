//! Trait definitions for storefront backends.
//!
//! The read side is split into [`CatalogManagement`] and [`OrderManagement`]; the write side, with its atomicity
//! requirements, lives on [`ShopDatabase`].
mod catalog_management;
mod data_objects;
mod order_management;
mod shop_database;

pub use catalog_management::CatalogManagement;
pub use data_objects::SettlementResult;
pub use order_management::OrderManagement;
pub use shop_database::{ShopDatabase, ShopDatabaseError};
