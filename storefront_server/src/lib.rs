//! # Storefront server
//! This module hosts the HTTP front-end for the storefront engine. It is responsible for:
//! Listening for incoming REST requests, deserialising their payloads, and handing them to the engine APIs.
//! Mapping engine results and errors back onto HTTP responses.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/api/products`: Catalog browsing with optional filters.
//! * `/api/orders`: Order placement and the order list view.
//! * `/api/orders/{id}`: The detail view for a single order.
//! * `/api/payments`: Payment registration.
pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
