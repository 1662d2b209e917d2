//! Database layer - connection pool, startup DDL, and the employee
//! repository
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Every operation is a single-row round trip - no multi-row
//!   transactions

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::{DbError, EmployeeRepo};
