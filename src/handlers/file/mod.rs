pub mod dispatch;
pub mod ops;
pub mod types;

use crate::error::AppError;
use crate::state::AppState;
use dispatch::dispatch;
use types::{FileOperationRequest, FileOperationResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

/// `POST /file_operation`. Operation failures are returned with HTTP 200 and
/// `status: "failure"`; only an unreadable body yields 400.
pub async fn file_operation(
    State(state): State<Arc<AppState>>,
    body: Result<Json<FileOperationRequest>, JsonRejection>,
) -> Result<FileOperationResponse, AppError> {
    let Json(req) = body?;
    Ok(dispatch(&state.config.workspace_path, &req).await)
}
