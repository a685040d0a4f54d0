//! Migrate command - Schema management for the booking tables.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            tracing::info!("Running pending migrations...");
            db.run_migrations().await?;
            print_status(&db).await?;
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back last migration...");
            db.rollback_migration().await?;
            print_status(&db).await?;
        }
        MigrateAction::Status => print_status(&db).await?,
        MigrateAction::Fresh => {
            tracing::warn!("Dropping barbers, bookings, day_offs and users, then re-creating them");
            db.fresh_migrations().await?;
            print_status(&db).await?;
        }
    }

    Ok(())
}

async fn print_status(db: &Database) -> AppResult<()> {
    for (name, applied) in db.migration_status().await? {
        println!("{:<48} {}", name, if applied { "applied" } else { "pending" });
    }
    Ok(())
}
