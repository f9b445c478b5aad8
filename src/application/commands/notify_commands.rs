//! Notify Commands - 通知相关命令

use serde_json::Value;

use crate::domain::BeepSeverity;

/// Hook 事件通知（走事件映射）
#[derive(Debug, Clone)]
pub struct NotifyHookCommand {
    pub event_type: String,
    pub payload: Option<Value>,
    pub timestamp: Option<String>,
    pub source: String,
}

/// 自定义通知（event_type 直接作为 cue id）
#[derive(Debug, Clone)]
pub struct NotifyCustomCommand {
    pub event_type: String,
    pub message: Option<String>,
}

/// 测试指定 cue
#[derive(Debug, Clone)]
pub struct TestSoundCommand {
    pub sound_type: String,
}

/// 测试系统提示音
#[derive(Debug, Clone)]
pub struct TestBeepCommand {
    pub severity: BeepSeverity,
}

/// 通知处理结果
///
/// `scheduled` 只表示任务已入队，不代表播放成功
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyResponse {
    pub message: String,
    pub event_type: String,
    pub cue_id: String,
    pub scheduled: bool,
}
