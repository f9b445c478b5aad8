//! System Beep - 平台提示音
//!
//! 把 [`BeepSeverity`] 映射为平台自带的提示音。
//! 找不到对应工具的平台在构造时即标记为不可用。

use std::path::{Path, PathBuf};

use super::command_backend::{find_program, run_to_completion};
use crate::application::ports::{AlertBeeper, PlaybackBackend, PlaybackError};
use crate::domain::BeepSeverity;

#[cfg(target_os = "macos")]
const ALERT_TOOL: &str = "afplay";

#[cfg(target_os = "windows")]
const ALERT_TOOL: &str = "powershell";

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const ALERT_TOOL: &str = "canberra-gtk-play";

/// 某个级别对应的命令行参数
#[cfg(target_os = "macos")]
fn alert_args(severity: BeepSeverity) -> Vec<String> {
    let sound = match severity {
        BeepSeverity::Default => "Tink",
        BeepSeverity::Error => "Basso",
        BeepSeverity::Warning => "Funk",
        BeepSeverity::Info => "Glass",
        BeepSeverity::Question => "Purr",
    };
    vec![format!("/System/Library/Sounds/{sound}.aiff")]
}

#[cfg(target_os = "windows")]
fn alert_args(severity: BeepSeverity) -> Vec<String> {
    let sound = match severity {
        BeepSeverity::Default => "Beep",
        BeepSeverity::Error => "Hand",
        BeepSeverity::Warning => "Exclamation",
        BeepSeverity::Info => "Asterisk",
        BeepSeverity::Question => "Question",
    };
    vec![
        "-NoProfile".to_string(),
        "-Command".to_string(),
        format!("[System.Media.SystemSounds]::{sound}.Play(); Start-Sleep -Milliseconds 600"),
    ]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn alert_args(severity: BeepSeverity) -> Vec<String> {
    // freedesktop sound theme ids
    let id = match severity {
        BeepSeverity::Default => "bell",
        BeepSeverity::Error => "dialog-error",
        BeepSeverity::Warning => "dialog-warning",
        BeepSeverity::Info => "dialog-information",
        BeepSeverity::Question => "dialog-question",
    };
    vec!["-i".to_string(), id.to_string()]
}

/// 系统提示音
pub struct SystemBeep {
    tool: Option<PathBuf>,
}

impl SystemBeep {
    /// 探测平台提示音工具
    pub fn detect() -> Self {
        let tool = find_program(Path::new(ALERT_TOOL));
        if tool.is_none() {
            tracing::debug!(tool = ALERT_TOOL, "System alert tool not found");
        }
        Self { tool }
    }

    /// 不可用的实例
    pub fn unavailable() -> Self {
        Self { tool: None }
    }
}

impl AlertBeeper for SystemBeep {
    fn is_available(&self) -> bool {
        self.tool.is_some()
    }

    fn beep(&self, severity: BeepSeverity) -> Result<(), PlaybackError> {
        let tool = self
            .tool
            .as_ref()
            .ok_or_else(|| PlaybackError::Unavailable(format!("{ALERT_TOOL} not found")))?;
        run_to_completion(tool, alert_args(severity))
    }
}

/// 作为最后一级播放后端：忽略文件，只发出默认提示音
impl PlaybackBackend for SystemBeep {
    fn name(&self) -> &'static str {
        "beep"
    }

    fn can_play(&self) -> bool {
        self.is_available()
    }

    fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        tracing::debug!(path = %path.display(), "Playing system beep in place of cue file");
        self.beep(BeepSeverity::Default)
    }
}
