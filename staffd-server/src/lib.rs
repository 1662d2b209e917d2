//! staffd-server: employee directory HTTP API
//!
//! Exposes CRUD for the employee roster over HTTP, backed by a
//! PostgreSQL table. The interesting part lives in [`service`]: the
//! email-uniqueness rule on create and the typed not-found handling on
//! delete. Everything else is routing and persistence plumbing.

pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use http::{run_server, ServerConfig};
pub use service::{EmployeeService, ServiceError};
