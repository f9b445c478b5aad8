//! Data Transfer Objects

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{NotifyResponse, SoundListResponse};

// ============================================================================
// Notify DTOs
// ============================================================================

fn default_source() -> String {
    "claude-code".to_string()
}

/// Hook 事件请求
#[derive(Debug, Deserialize)]
pub struct HookEventRequest {
    pub event_type: String,
    #[serde(default)]
    pub payload: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default = "default_source")]
    pub source: String,
}

/// 自定义通知参数（query string）
#[derive(Debug, Deserialize)]
pub struct CustomNotifyParams {
    pub event_type: Option<String>,
    pub message: Option<String>,
}

/// 通知响应
///
/// `sound_played` 只表示播放任务已入队，不代表播放成功
#[derive(Debug, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub success: bool,
    pub message: String,
    pub event_type: String,
    pub sound_played: bool,
}

impl From<NotifyResponse> for NotificationResponse {
    fn from(resp: NotifyResponse) -> Self {
        Self {
            success: true,
            message: resp.message,
            event_type: resp.event_type,
            sound_played: resp.scheduled,
        }
    }
}

// ============================================================================
// Test DTOs
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct TestSoundResponse {
    pub success: bool,
    pub message: String,
    pub sound_type: String,
    pub queued: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TestBeepResponse {
    pub success: bool,
    pub message: String,
    pub severity: String,
    pub queued: bool,
}

// ============================================================================
// Sound DTOs
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct SoundListDto {
    pub available_sounds: BTreeMap<String, String>,
    pub base_path: String,
}

impl From<SoundListResponse> for SoundListDto {
    fn from(resp: SoundListResponse) -> Self {
        Self {
            available_sounds: resp.available_sounds,
            base_path: resp.base_path,
        }
    }
}

// ============================================================================
// Status DTOs
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub status: String,
    pub version: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub audio_available: bool,
    pub backend: Option<String>,
    pub queue_open: bool,
}
