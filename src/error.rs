use crate::response::ApiResponse;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors raised before a request reaches the dispatcher.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Failures of a single file operation. These never leave the dispatcher as
/// errors; they become the `failure` response body.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{field} is required for {operation} operation.")]
    MissingField {
        field: &'static str,
        operation: &'static str,
    },

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("file_path must not be empty.")]
    EmptyPath,

    #[error("'{src}' and '{dst}' are the same file")]
    SameFile { src: String, dst: String },

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl OperationError {
    pub const FILE_MISSING: Self = OperationError::NotFound("File does not exist.");
    pub const SOURCE_MISSING: Self = OperationError::NotFound("Source file does not exist.");
}
