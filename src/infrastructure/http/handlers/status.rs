//! Status Handlers
//!
//! 存活检查，不涉及播放

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{HealthResponse, ServiceInfo};
use crate::infrastructure::http::state::AppState;

/// GET /
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "Hook Notification Service".to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Ready to receive hook events".to_string(),
    })
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        audio_available: state.audio_backend.is_some(),
        backend: state.audio_backend.map(str::to_string),
        queue_open: state.queue.is_open(),
    })
}
