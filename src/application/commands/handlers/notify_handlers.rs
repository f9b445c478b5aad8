//! Notify Command Handlers

use std::sync::Arc;

use crate::application::commands::notify_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{DispatchQueuePort, PlaybackJob, SubmitError};
use crate::domain::{is_known_event, resolve_cue};

/// 入队播放任务
///
/// 队列已满时丢弃任务并返回 `Ok(false)`；队列关闭是基础设施错误
fn schedule(queue: &dyn DispatchQueuePort, job: PlaybackJob) -> Result<bool, ApplicationError> {
    let job_id = job.job_id;
    match queue.submit(job) {
        Ok(()) => {
            tracing::debug!(job_id = %job_id, "Playback job queued");
            Ok(true)
        }
        Err(SubmitError::QueueFull) => {
            tracing::warn!(job_id = %job_id, "Playback queue full, dropping job");
            Ok(false)
        }
        Err(e) => {
            tracing::error!(job_id = %job_id, error = %e, "Failed to queue playback job");
            Err(e.into())
        }
    }
}

/// NotifyHook Handler - 处理 hook 事件
pub struct NotifyHookHandler {
    queue: Arc<dyn DispatchQueuePort>,
}

impl NotifyHookHandler {
    pub fn new(queue: Arc<dyn DispatchQueuePort>) -> Self {
        Self { queue }
    }

    pub fn handle(&self, cmd: NotifyHookCommand) -> Result<NotifyResponse, ApplicationError> {
        tracing::info!(event_type = %cmd.event_type, source = %cmd.source, "Hook event received");
        tracing::debug!(
            event_type = %cmd.event_type,
            payload = ?cmd.payload,
            timestamp = ?cmd.timestamp,
            "Hook event details"
        );

        let cue_id = resolve_cue(&cmd.event_type);
        if !is_known_event(&cmd.event_type) {
            tracing::debug!(event_type = %cmd.event_type, cue_id = %cue_id, "Unknown event label, using fallback cue");
        }
        let scheduled = schedule(self.queue.as_ref(), PlaybackJob::cue(cue_id))?;

        let message = if scheduled {
            format!("Hook event '{}' handled", cmd.event_type)
        } else {
            format!("Hook event '{}' accepted, playback queue full", cmd.event_type)
        };

        tracing::info!(event_type = %cmd.event_type, cue_id = %cue_id, scheduled, "Hook event handled");

        Ok(NotifyResponse {
            message,
            event_type: cmd.event_type,
            cue_id: cue_id.to_string(),
            scheduled,
        })
    }
}

/// NotifyCustom Handler - event_type 直接作为 cue id
pub struct NotifyCustomHandler {
    queue: Arc<dyn DispatchQueuePort>,
}

impl NotifyCustomHandler {
    pub fn new(queue: Arc<dyn DispatchQueuePort>) -> Self {
        Self { queue }
    }

    /// 任何字符串都接受，包括空串；未登记的 cue 在播放时替换为兜底 cue
    pub fn handle(&self, cmd: NotifyCustomCommand) -> Result<NotifyResponse, ApplicationError> {
        tracing::info!(event_type = %cmd.event_type, "Custom notification received");

        let scheduled = schedule(self.queue.as_ref(), PlaybackJob::cue(cmd.event_type.clone()))?;
        let message = cmd
            .message
            .unwrap_or_else(|| format!("Custom notification '{}' handled", cmd.event_type));

        Ok(NotifyResponse {
            message,
            cue_id: cmd.event_type.clone(),
            event_type: cmd.event_type,
            scheduled,
        })
    }
}

/// TestSound Handler - 运维验证单个 cue 文件
pub struct TestSoundHandler {
    queue: Arc<dyn DispatchQueuePort>,
}

impl TestSoundHandler {
    pub fn new(queue: Arc<dyn DispatchQueuePort>) -> Self {
        Self { queue }
    }

    pub fn handle(&self, cmd: TestSoundCommand) -> Result<NotifyResponse, ApplicationError> {
        tracing::info!(sound_type = %cmd.sound_type, "Sound test requested");

        let scheduled = schedule(self.queue.as_ref(), PlaybackJob::cue(cmd.sound_type.clone()))?;
        let message = if scheduled {
            format!("Test sound '{}' playing", cmd.sound_type)
        } else {
            format!("Test sound '{}' dropped, playback queue full", cmd.sound_type)
        };

        Ok(NotifyResponse {
            message,
            cue_id: cmd.sound_type.clone(),
            event_type: cmd.sound_type,
            scheduled,
        })
    }
}

/// TestBeep Handler - 系统提示音
pub struct TestBeepHandler {
    queue: Arc<dyn DispatchQueuePort>,
}

impl TestBeepHandler {
    pub fn new(queue: Arc<dyn DispatchQueuePort>) -> Self {
        Self { queue }
    }

    pub fn handle(&self, cmd: TestBeepCommand) -> Result<NotifyResponse, ApplicationError> {
        tracing::info!(severity = %cmd.severity, "Beep test requested");

        let scheduled = schedule(self.queue.as_ref(), PlaybackJob::beep(cmd.severity))?;
        let message = if scheduled {
            format!("System beep '{}' playing", cmd.severity)
        } else {
            format!("System beep '{}' dropped, playback queue full", cmd.severity)
        };

        Ok(NotifyResponse {
            message,
            event_type: cmd.severity.to_string(),
            cue_id: cmd.severity.to_string(),
            scheduled,
        })
    }
}
