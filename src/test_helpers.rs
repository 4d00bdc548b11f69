use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;

use crate::{
    config::{AppConfig, DatabaseConfig},
    db::connection,
    routes::app,
    state::AppState,
};

/// State over a fresh, private in-memory SQLite database.
pub async fn sqlite_state() -> Arc<AppState> {
    let mut cfg = AppConfig::default();
    cfg.database = DatabaseConfig::in_memory_sqlite();
    let db = connection::connect(&cfg.database)
        .await
        .expect("connect to in-memory sqlite");
    AppState::new(cfg, db)
}

pub async fn test_app() -> Router {
    app(sqlite_state().await)
}

/// App over an arbitrary connection, e.g. a `MockDatabase`.
pub fn test_app_with_db(db: DatabaseConnection) -> Router {
    app(AppState::new(AppConfig::default(), db))
}
