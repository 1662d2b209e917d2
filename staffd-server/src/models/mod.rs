//! Domain models with validation at construction
//!
//! User input is validated when creating these types. Invalid input
//! returns ValidationError, not panic.

pub mod employee;
pub mod validation;

pub use employee::{Email, Employee, NewEmployee};
pub use validation::ValidationError;
