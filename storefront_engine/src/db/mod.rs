//! Database management and control for the storefront engine.
#[cfg(feature = "sqlite")]
pub mod sqlite;
