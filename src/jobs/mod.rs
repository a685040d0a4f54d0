//! Background jobs.
//!
//! Jobs are persisted with apalis in the same PostgreSQL database and
//! processed by `jobs work`.

mod email_job;

use apalis_sql::postgres::PostgresStorage;
use apalis_sql::sqlx::postgres::PgPoolOptions;

use crate::errors::{AppError, AppResult};

pub use email_job::{deliver, email_job_handler, EmailConfig, EmailJob};

/// Connect to the job tables, creating them on first use.
pub async fn email_storage(database_url: &str) -> AppResult<PostgresStorage<EmailJob>> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .map_err(|e| AppError::internal(format!("Failed to connect to database: {}", e)))?;

    PostgresStorage::setup(&pool)
        .await
        .map_err(|e| AppError::internal(format!("Failed to setup job storage: {}", e)))?;

    Ok(PostgresStorage::new(pool))
}
