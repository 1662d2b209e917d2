//! Repository implementations for database access
//!
//! Patterns:
//! - Repositories borrow the pool, constructed per call site
//! - Conflicts are handled via the DB unique constraint (no
//!   check-then-insert)

pub mod employees;

pub use employees::{DbError, EmployeeRepo};
