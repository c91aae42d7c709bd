//! Database Module
//!
//! Opens the SQLite connection pool and applies the embedded migrations.

use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    migrate::MigrateError,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
};
use thiserror::Error;

/// Connections kept by a file-backed pool
const MAX_CONNECTIONS: u32 = 5;

/// Errors raised while opening the database
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to open database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Failed to apply migrations: {0}")]
    Migrate(#[from] MigrateError),
}

/// Whether the URL names a private in-memory database
fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open a pool for `database_url` and bring the schema up to date.
///
/// File databases use WAL journaling. In-memory databases live as long as
/// their connection, so the pool pins exactly one connection forever.
pub async fn connect(database_url: &str) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|source| DatabaseError::InvalidUrl {
            url: database_url.to_string(),
            source,
        })?
        .create_if_missing(true);

    let in_memory = is_in_memory(database_url);
    let (options, pool_options) = if in_memory {
        (
            options,
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(Option::<Duration>::None)
                .max_lifetime(Option::<Duration>::None),
        )
    } else {
        (
            options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal),
            SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS),
        )
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(DatabaseError::Connect)?;
    tracing::info!(in_memory, "Database connection established");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}
