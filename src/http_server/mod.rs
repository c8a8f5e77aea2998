//! # Customer HTTP Server Module
//!
//! The network boundary of the service: Axum router, per-endpoint handlers,
//! and the error-to-status mapping.
//!
//! # Endpoints
//!
//! - `POST /customers` - Create a customer
//! - `GET /customers/{id}` - Read one customer
//! - `PUT /customers/{id}` - Rewrite all fields of a customer
//! - `DELETE /customers/{id}` - Remove a customer
//! - `GET /customers?search=TERM` - Substring search across four fields
//! - `GET /customers/page/{page}` - Fixed-size pagination

pub mod config;
pub mod customer_routes;
pub mod errors;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
