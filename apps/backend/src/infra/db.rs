use std::time::Duration;

use futures_util::future::BoxFuture;
use migration::{migrate, MigrationCommand};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction,
    TransactionTrait,
};
use tracing::info;

use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

/// Open a pool for `profile`. Does NOT run migrations.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(profile.url());
    opt.acquire_timeout(Duration::from_secs(5)).sqlx_logging(false);

    if matches!(profile, DbProfile::InMemory) {
        // every new sqlite::memory: connection is a fresh empty database
        opt.min_connections(1).max_connections(1);
    }

    Database::connect(opt).await.map_err(|e| {
        AppError::config(
            ErrorCode::ConfigError,
            format!("failed to connect to database: {e}"),
        )
    })
}

/// Connect and bring the schema up to date on the same pool.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(&profile).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    info!(backend = ?conn.get_database_backend(), "database ready");
    Ok(conn)
}

/// The canonical way for handlers and services to reach the database.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state.db().ok_or_else(AppError::db_unavailable)
}

/// Run `f` inside a transaction: commit on `Ok`, roll back on `Err`.
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, Result<R, AppError>>,
{
    let txn = require_db(state)?.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // best-effort; the original error wins
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
