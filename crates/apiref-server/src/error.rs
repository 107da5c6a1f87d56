//! Error types for the HTTP server.

use apiref_index::IndexError;
use apiref_site::{ContentError, ResolveError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Path is not a reference page URL.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Page resolution failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Content fragment could not be read.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Index artifacts could not be loaded.
    #[error(transparent)]
    Index(#[from] IndexError),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Resolve(e) if e.is_bad_request() => StatusCode::BAD_REQUEST,
            Self::Resolve(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::PageNotFound(_) | Self::Content(ContentError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            Self::Resolve(_) | Self::Content(_) | Self::Index(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, axum::Json(json!({"error": self.to_string()}))).into_response()
    }
}
