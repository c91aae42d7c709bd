//! Errors raised while starting or running the server.

use thiserror::Error;

use crate::infrastructure::database::DatabaseError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
