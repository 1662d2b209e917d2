//! Startup DDL for the employees table

use sqlx::PgPool;

/// Create the employees table if it does not exist.
///
/// The UNIQUE constraint on email is the authoritative guard against
/// duplicate addresses; the service-level lookup is only an early
/// exit. Idempotent, safe to run on every startup.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running employee table migration...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id BIGSERIAL PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
