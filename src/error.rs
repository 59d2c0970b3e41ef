//! Error types shared by the stores and the HTTP handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or empty identity assertion, or bad login credentials.
    #[error("Unauthorized")]
    Unauthorized,

    /// Username already registered.
    #[error("User already exists")]
    Conflict,

    /// Note absent, or present but owned by someone else. The two cases are
    /// deliberately indistinguishable to the caller.
    #[error("Note not found or you are not the owner")]
    NoteNotFound,

    /// Unexpected I/O or parse failure against the backing file. A missing
    /// file is not a storage error; read paths treat it as an empty store.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Conflict => (StatusCode::CONFLICT, self.to_string()),
            AppError::NoteNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Storage(detail) => {
                tracing::error!("storage failure: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage failure".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
