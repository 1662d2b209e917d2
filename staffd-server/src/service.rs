//! Employee service - the business rules over the repository
//!
//! Two decisions live here and nowhere else: a create must not reuse
//! an email already on the roster, and a delete of an unknown id is a
//! typed not-found rather than a silent no-op. Reads and updates
//! delegate straight through.

use sqlx::PgPool;

use crate::db::repos::{DbError, EmployeeRepo};
use crate::models::{Employee, NewEmployee};

/// Service error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("employee already exists with email '{email}'")]
    DuplicateEmail { email: String },

    #[error("employee {id} not found")]
    NotFound { id: i64 },

    #[error(transparent)]
    Db(DbError),
}

impl From<DbError> for ServiceError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::DuplicateEmail { email } => Self::DuplicateEmail { email },
            other => Self::Db(other),
        }
    }
}

/// Employee service, wired to its storage by the constructor.
pub struct EmployeeService<'a> {
    repo: EmployeeRepo<'a>,
}

impl<'a> EmployeeService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            repo: EmployeeRepo::new(pool),
        }
    }

    /// Create a new employee.
    ///
    /// The email lookup is an early exit; the UNIQUE constraint on the
    /// table is what actually closes the race between two concurrent
    /// creates, and its violation maps to the same error. Nothing is
    /// persisted on failure.
    pub async fn create(&self, new: NewEmployee) -> Result<Employee, ServiceError> {
        if self.repo.find_by_email(new.email.as_str()).await?.is_some() {
            return Err(ServiceError::DuplicateEmail {
                email: new.email.into_string(),
            });
        }

        let employee = self.repo.insert(&new).await?;
        tracing::debug!(id = employee.id, "employee created");
        Ok(employee)
    }

    /// List all employees in insertion order.
    pub async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    /// Fetch an employee by id. Absence is `Ok(None)`, not an error;
    /// the caller decides whether that is worth a 404.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, ServiceError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Persist the given employee as-is (insert or overwrite).
    ///
    /// Deliberately no existence check and no duplicate-email lookup:
    /// this trusts that the caller already resolved the id via
    /// [`get_by_id`](Self::get_by_id) and treated absence as "nothing
    /// to update". A conflicting email still trips the table
    /// constraint and comes back as `DuplicateEmail`.
    pub async fn update(&self, employee: Employee) -> Result<Employee, ServiceError> {
        let updated = self.repo.upsert(&employee).await?;
        tracing::debug!(id = updated.id, "employee updated");
        Ok(updated)
    }

    /// Remove an employee by id.
    ///
    /// An unknown id is a typed `NotFound`, never a crash or a silent
    /// success.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let employee = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound { id })?;

        self.repo.delete(&employee).await?;
        tracing::debug!(id, "employee deleted");
        Ok(())
    }
}
