use sea_orm::DatabaseConnection;
use tracing::info;

use super::providers;
use crate::config::DatabaseConfig;

/// Opens the pool for `cfg.url` and creates any missing tables from the
/// registered entities.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let provider = providers::default_registry()?.provider_for_url(&cfg.url)?;
    info!(provider = provider.id().as_str(), "connecting to database");

    let db = provider.connect(cfg).await?;

    info!("syncing database schema from entities");
    db.get_schema_registry("todolist_backend::db::entities::*")
        .sync(&db)
        .await?;
    Ok(db)
}
