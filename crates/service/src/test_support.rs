#![cfg(test)]
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with the schema applied. Every call is isolated.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = unmigrated_db().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Connection with no tables, for exercising storage failures.
pub async fn unmigrated_db() -> Result<DatabaseConnection, anyhow::Error> {
    let mut cfg = DatabaseConfig::for_url("sqlite::memory:");
    cfg.min_connections = 1;
    Ok(connect_with_config(&cfg).await?)
}
