//! Employee repository
//!
//! Row access for the employees table:
//! - insert: INSERT .. RETURNING, unique violation surfaces as a
//!   typed duplicate (the constraint is the authoritative check)
//! - upsert: INSERT .. ON CONFLICT (id) DO UPDATE, overwrite-as-given
//! - find_all: ordered by id, i.e. insertion order

use sqlx::PgPool;

use crate::models::{Employee, NewEmployee};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("employee already exists with email '{email}'")]
    DuplicateEmail { email: String },
}

impl DbError {
    /// Classify a driver error, turning a unique-constraint violation
    /// into the typed duplicate for the given address.
    fn from_write(err: sqlx::Error, email: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::DuplicateEmail {
                email: email.to_owned(),
            },
            _ => Self::Sqlx(err),
        }
    }
}

/// Employee repository
pub struct EmployeeRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> EmployeeRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a single employee by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DbError> {
        let row = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Fetch a single employee by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DbError> {
        let row = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// List all employees in insertion order.
    pub async fn find_all(&self) -> Result<Vec<Employee>, DbError> {
        let rows = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert a new employee, returning the stored row with its
    /// assigned id.
    ///
    /// An email collision hits the UNIQUE constraint and comes back as
    /// [`DbError::DuplicateEmail`]; nothing is persisted in that case.
    pub async fn insert(&self, new: &NewEmployee) -> Result<Employee, DbError> {
        sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(new.email.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_write(e, new.email.as_str()))
    }

    /// Overwrite the row with the given id, inserting it if no such
    /// row exists. The value is persisted as-is; existence checks are
    /// the caller's job.
    pub async fn upsert(&self, employee: &Employee) -> Result<Employee, DbError> {
        sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (id, first_name, last_name, email)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                email = EXCLUDED.email
            RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(employee.id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_write(e, &employee.email))
    }

    /// Remove an employee by identity.
    pub async fn delete(&self, employee: &Employee) -> Result<(), DbError> {
        self.delete_by_id(employee.id).await?;
        Ok(())
    }

    /// Remove the row with the given id, returning the number of rows
    /// affected (0 when the id was never assigned or already removed).
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // DB-backed coverage for this repository lives in
    // tests/employee_api.rs; run with DATABASE_URL set:
    // cargo test -p staffd-server -- --ignored
}
