//! Server runner: the composition root.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::{
    config::{ServerConfig, StorageBackend},
    domain::RoomRepository,
    error::ServerError,
    infrastructure::{
        database,
        repository::{InMemoryRoomRepository, SqliteRoomRepository},
    },
};

use super::{router::create_router, signal::shutdown_signal, state::AppState};

/// Construct the repository selected by the configuration
pub async fn build_repository(
    config: &ServerConfig,
) -> Result<Arc<dyn RoomRepository>, ServerError> {
    let repository: Arc<dyn RoomRepository> = match config.storage {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; rooms are lost on shutdown");
            Arc::new(InMemoryRoomRepository::new())
        }
        StorageBackend::Sqlite => {
            let pool = database::connect(&config.database_url).await?;
            Arc::new(SqliteRoomRepository::new(pool))
        }
    };
    Ok(repository)
}

/// Run the room finder server until a shutdown signal arrives
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let repository = build_repository(&config).await?;
    let state = Arc::new(AppState::new(repository));
    let app = create_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("Room finder listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
