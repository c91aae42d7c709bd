//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::RepositoryError;

/// Errors returned by `RoomService`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomServiceError {
    /// The store failed
    #[error("Storage unavailable: {0}")]
    Storage(String),
}

impl From<RepositoryError> for RoomServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Storage(message) => RoomServiceError::Storage(message),
        }
    }
}
