//! Error types for the Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
///
/// Every failure an operation can produce is a terminal, typed outcome;
/// nothing is retried. The HTTP layer maps each variant to the wire
/// envelope via `IntoResponse`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A create/update payload arrived without a book name
    #[error("book name is missing")]
    MissingName,

    /// A create/update payload claims more pages read than the book has
    #[error("readPage must not be greater than pageCount")]
    ReadPageExceedsPageCount,

    /// No book in the collection carries the requested id
    #[error("book not found: {0}")]
    NotFound(String),

    /// Broken internal invariant (e.g. an appended record not visible)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body: `status` is `fail` for caller mistakes and
/// `error` for server faults
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, status, message) = match &self {
            AppError::MissingName => (
                StatusCode::BAD_REQUEST,
                "fail",
                "Please provide a book name".to_string(),
            ),
            AppError::ReadPageExceedsPageCount => (
                StatusCode::BAD_REQUEST,
                "fail",
                "readPage must not be greater than pageCount".to_string(),
            ),
            AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "fail", "Book not found".to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            status: status.to_string(),
            message,
        });

        (code, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
