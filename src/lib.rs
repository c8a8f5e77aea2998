//! custodb - a small, self-hostable customer record service
//!
//! Thin glue between an HTTP surface and a single SQLite table: field
//! validation, parameter-bound SQL, pagination arithmetic, and error-status
//! mapping.

pub mod customer;
pub mod http_server;
pub mod store;
pub mod validation;
