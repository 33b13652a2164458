use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Crate-wide error type. Handlers return `Result<T>` from the prelude and
/// axum renders the failure as a `{"error": "<message>"}` body.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Extraction(String),

    #[error("remote service failure: {0}")]
    RemoteService(String),

    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    #[error("storage failure: {0}")]
    Storage(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Validation(_) | Error::Extraction(_) => StatusCode::BAD_REQUEST,
            // analysis failures are absorbed into the fallback result before
            // reaching axum; reaching this arm means a handler leaked one
            Error::RemoteService(msg) | Error::MalformedResponse(msg) => {
                tracing::error!("unabsorbed analysis error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Error::Storage(err) => {
                tracing::error!("storage error: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
