//! Migration CLI command.

use explorer_core::config::AppConfig;
use explorer_core::error::AppError;
use explorer_database::DatabasePool;

/// Run all pending migrations against the configured database.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    explorer_database::migration::run_migrations(db.pool()).await?;
    println!("Migrations up to date.");
    Ok(())
}
