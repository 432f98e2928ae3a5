use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct HealthCheckResponse {
    health_status: &'static str,
    uptime: String,
    version: &'static str,
}

#[derive(Serialize)]
pub struct ReadinessCheckResponse {
    readiness_status: &'static str,
    workspace: bool,
    workspace_path: String,
}

pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<HealthCheckResponse>> {
    let uptime = state.start_time.elapsed().as_secs();
    Json(ApiResponse::success(HealthCheckResponse {
        health_status: "ok",
        uptime: format!("{}s", uptime),
        version: env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<ReadinessCheckResponse>> {
    // Ready only when the workspace is a directory.
    let workspace_ready = tokio::fs::metadata(&state.config.workspace_path)
        .await
        .is_ok_and(|m| m.is_dir());

    Json(ApiResponse::success(ReadinessCheckResponse {
        readiness_status: if workspace_ready { "ready" } else { "not_ready" },
        workspace: workspace_ready,
        workspace_path: state.config.workspace_path.display().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use clap::Parser;

    fn state_for(workspace: &std::path::Path) -> Arc<AppState> {
        let config = Config::try_parse_from([
            "file-operation-server".to_string(),
            format!("--workspace-path={}", workspace.display()),
        ])
        .unwrap();
        Arc::new(AppState::new(config))
    }

    #[tokio::test]
    async fn test_not_ready_without_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");

        let Json(resp) = readiness_check(State(state_for(&missing))).await;
        assert_eq!(resp.data.readiness_status, "not_ready");
        assert!(!resp.data.workspace);
    }

    #[tokio::test]
    async fn test_not_ready_when_workspace_is_a_file() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let Json(resp) = readiness_check(State(state_for(file.path()))).await;
        assert!(!resp.data.workspace);
    }
}
