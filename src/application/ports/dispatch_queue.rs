//! Dispatch Queue Port - 播放任务队列
//!
//! HTTP 层只负责入队，入队从不等待

use thiserror::Error;
use uuid::Uuid;

use crate::domain::BeepSeverity;

/// 入队错误
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// 队列已满，任务被丢弃
    #[error("Playback queue is full")]
    QueueFull,

    /// 播放子系统已关闭
    #[error("Playback queue is closed")]
    Closed,
}

/// 任务内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackKind {
    /// 按 cue id 播放（未登记的 id 在 worker 内兜底）
    Cue(String),
    /// 系统提示音
    Beep(BeepSeverity),
}

/// 播放任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackJob {
    pub job_id: Uuid,
    pub kind: PlaybackKind,
}

impl PlaybackJob {
    pub fn cue(cue_id: impl Into<String>) -> Self {
        Self {
            job_id: Uuid::new_v4(),
            kind: PlaybackKind::Cue(cue_id.into()),
        }
    }

    pub fn beep(severity: BeepSeverity) -> Self {
        Self {
            job_id: Uuid::new_v4(),
            kind: PlaybackKind::Beep(severity),
        }
    }
}

/// Dispatch Queue Port
pub trait DispatchQueuePort: Send + Sync {
    /// 非阻塞入队
    fn submit(&self, job: PlaybackJob) -> Result<(), SubmitError>;

    /// 队列是否仍接受任务
    fn is_open(&self) -> bool;
}
