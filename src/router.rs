use crate::handlers::{file, health};
use crate::middleware::logging;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/file_operation", post(file::file_operation))
        .layer(middleware::from_fn(logging::logging_middleware))
        .with_state(state)
}
