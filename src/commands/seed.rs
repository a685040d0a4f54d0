//! Seed command - Inserts the default barbers.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::db::seed::seed_barbers;
use crate::infra::{BarberStore, Database};

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    // Applies pending migrations so the barbers table exists
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let store = BarberStore::new(db.get_connection());
    let inserted = seed_barbers(&store).await?;

    tracing::info!(inserted, "Seed completed");
    Ok(())
}
