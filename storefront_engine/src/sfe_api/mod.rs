//! The engine public API: order placement and payment flows, plus read-only views over the catalog and orders.
pub mod catalog_api;
pub mod errors;
pub mod order_flow_api;
pub mod order_objects;
pub mod order_query_api;
