//! Playback Backend Port - 播放后端抽象
//!
//! 播放是阻塞调用，只在 worker 线程上执行，不会出现在请求路径上

use std::path::Path;

use thiserror::Error;

use crate::domain::BeepSeverity;

/// 播放错误
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Audio device error: {0}")]
    Device(String),

    #[error("Player process failed: {0}")]
    ProcessFailed(String),
}

/// 播放后端
///
/// 按注册顺序探测，启动时选中第一个 `can_play() == true` 的实现
pub trait PlaybackBackend: Send + Sync {
    /// 后端名称（日志、健康检查使用）
    fn name(&self) -> &'static str;

    /// 当前主机上是否可用
    fn can_play(&self) -> bool;

    /// 播放音频文件，阻塞直到播放结束或后端报告完成
    fn play(&self, path: &Path) -> Result<(), PlaybackError>;
}

/// 系统提示音
pub trait AlertBeeper: Send + Sync {
    fn is_available(&self) -> bool;

    fn beep(&self, severity: BeepSeverity) -> Result<(), PlaybackError>;
}
