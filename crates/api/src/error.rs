//! HTTP-facing error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use service::ServiceError;
use thiserror::Error;
use tracing::error;

/// Errors a pet handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No pet with the requested id.  Rendered as an empty 404.
    #[error("pet not found")]
    NotFound,

    /// The store failed.  Rendered as an empty 500.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Service(e) => {
                error!("request failed: {e}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Errors raised while starting the server.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("invalid CORS origin '{0}'")]
    InvalidOrigin(String),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
