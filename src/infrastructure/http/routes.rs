//! HTTP Routes
//!
//! API Endpoints:
//! - /                      GET   服务状态
//! - /health                GET   健康检查
//! - /notify/hook           POST  Hook 事件通知（事件映射 → cue）
//! - /notify/custom         POST  自定义通知（event_type 直接作为 cue）
//! - /test/sound/{type}     POST  测试指定 cue
//! - /test/beep/{severity}  POST  测试系统提示音
//! - /sounds/list           GET   列出提示音目录

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .nest("/notify", notify_routes())
        .nest("/test", test_routes())
        .route("/sounds/list", get(handlers::list_sounds))
}

/// Notify 路由
fn notify_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/hook", post(handlers::notify_hook))
        .route("/custom", post(handlers::notify_custom))
}

/// Test 路由
fn test_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sound/:sound_type", post(handlers::test_sound))
        .route("/beep/:severity", post(handlers::test_beep))
}
