//! Error handling for the HTTP layer.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    domain::ValidationError,
    infrastructure::dto::http::{ErrorDto, FieldErrorDto, QueryError},
    usecase::RoomServiceError,
};

use super::header;

/// Errors returned by the room endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or malformed
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A create request carried an id
    #[error("A new room cannot already have an ID")]
    IdExists,

    #[error("Room not found: {0}")]
    NotFound(String),

    /// Unreadable body, path or query
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::IdExists | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message key of the error body
    pub fn message_key(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "error.validation",
            ApiError::IdExists => "error.idexists",
            ApiError::NotFound(_) => "error.notfound",
            ApiError::BadRequest(_) => "error.http.400",
            ApiError::Internal(_) => "error.internalServerError",
        }
    }

    fn body(&self) -> ErrorDto {
        let (description, field_errors) = match self {
            ApiError::Validation(err) => (None, vec![FieldErrorDto::from(err)]),
            // Storage details stay in the logs of release builds
            ApiError::Internal(_) if cfg!(not(debug_assertions)) => (None, Vec::new()),
            other => (Some(other.to_string()), Vec::new()),
        };
        ErrorDto {
            message: self.message_key().to_string(),
            description,
            field_errors,
        }
    }

    fn headers(&self) -> HeaderMap {
        header::failure_alert(self.message_key())
    }
}

impl From<RoomServiceError> for ApiError {
    fn from(err: RoomServiceError) -> Self {
        match err {
            RoomServiceError::Storage(message) => ApiError::Internal(message),
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status.as_u16(), "Request failed: {}", self);
        } else {
            tracing::warn!(status = %status.as_u16(), "Request rejected: {}", self);
        }

        (status, self.headers(), Json(self.body())).into_response()
    }
}
