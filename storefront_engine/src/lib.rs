//! Storefront Engine
//!
//! The storefront engine is the order and payment core of the storefront server: it owns the rules for building
//! priced orders against the catalog and for reconciling incoming payments against an order's total until the order
//! settles. It is transport-agnostic; the HTTP layer lives in the `storefront_server` crate.
//!
//! The library is divided into two main sections:
//! 1. Database management and control ([`mod@db`]). SQLite is the supported backend. You should never need to access
//!    the database directly. Instead, use the public API provided by the engine. The exception is the data types used
//!    in the database, which are defined in the [`db_types`] module and are public.
//! 2. The engine public API ([`mod@sfe_api`]). This provides the public-facing functionality: placing orders,
//!    registering payments, and reading back catalog and order state. Backends need to implement the traits in the
//!    [`traits`] module in order to serve the storefront server.
//!
//! The engine also provides a set of events that can be subscribed to. When an order settles, an `OrderPaidEvent` is
//! emitted. A simple actor framework is used so that you can easily hook into these events and perform custom actions.
mod db;

pub mod db_types;
pub mod events;
mod sfe_api;
pub mod traits;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

#[cfg(feature = "sqlite")]
pub use db::sqlite::SqliteDatabase;
pub use sfe_api::{
    catalog_api::CatalogApi,
    errors::OrderFlowError,
    order_flow_api::OrderFlowApi,
    order_objects,
    order_query_api::OrderQueryApi,
};
