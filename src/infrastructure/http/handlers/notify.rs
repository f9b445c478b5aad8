//! Notify Handlers
//!
//! 只做入队，立即返回；播放结果不影响响应

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::{
    NotifyCustomCommand, NotifyHookCommand, TestBeepCommand, TestSoundCommand,
};
use crate::domain::BeepSeverity;
use crate::infrastructure::http::dto::{
    CustomNotifyParams, HookEventRequest, NotificationResponse, TestBeepResponse,
    TestSoundResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /notify/hook
pub async fn notify_hook(
    State(state): State<Arc<AppState>>,
    Json(req): Json<HookEventRequest>,
) -> Result<Json<NotificationResponse>, ApiError> {
    let cmd = NotifyHookCommand {
        event_type: req.event_type,
        payload: req.payload,
        timestamp: req.timestamp,
        source: req.source,
    };

    let result = state.notify_hook_handler.handle(cmd)?;
    Ok(Json(result.into()))
}

/// POST /notify/custom?event_type=&message=
pub async fn notify_custom(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CustomNotifyParams>,
) -> Result<Json<NotificationResponse>, ApiError> {
    let event_type = params
        .event_type
        .ok_or_else(|| ApiError::BadRequest("event_type is required".to_string()))?;

    let cmd = NotifyCustomCommand {
        event_type,
        message: params.message,
    };

    let result = state.notify_custom_handler.handle(cmd)?;
    Ok(Json(result.into()))
}

/// POST /test/sound/:sound_type
pub async fn test_sound(
    State(state): State<Arc<AppState>>,
    Path(sound_type): Path<String>,
) -> Result<Json<TestSoundResponse>, ApiError> {
    let result = state.test_sound_handler.handle(TestSoundCommand { sound_type })?;

    Ok(Json(TestSoundResponse {
        success: true,
        message: result.message,
        sound_type: result.cue_id,
        queued: result.scheduled,
    }))
}

/// POST /test/beep/:severity
pub async fn test_beep(
    State(state): State<Arc<AppState>>,
    Path(severity): Path<String>,
) -> Result<Json<TestBeepResponse>, ApiError> {
    let severity = BeepSeverity::parse_lenient(&severity);
    let result = state.test_beep_handler.handle(TestBeepCommand { severity })?;

    Ok(Json(TestBeepResponse {
        success: true,
        message: result.message,
        severity: severity.to_string(),
        queued: result.scheduled,
    }))
}
