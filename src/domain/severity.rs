//! Beep Severity - 系统提示音级别

use serde::{Deserialize, Serialize};

/// 系统提示音级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeepSeverity {
    #[default]
    Default,
    Error,
    Warning,
    Info,
    Question,
}

impl BeepSeverity {
    pub const ALL: [BeepSeverity; 5] = [
        BeepSeverity::Default,
        BeepSeverity::Error,
        BeepSeverity::Warning,
        BeepSeverity::Info,
        BeepSeverity::Question,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BeepSeverity::Default => "default",
            BeepSeverity::Error => "error",
            BeepSeverity::Warning => "warning",
            BeepSeverity::Info => "info",
            BeepSeverity::Question => "question",
        }
    }

    /// 宽松解析：未知级别按 `Default` 处理
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => BeepSeverity::Error,
            "warning" => BeepSeverity::Warning,
            "info" => BeepSeverity::Info,
            "question" => BeepSeverity::Question,
            _ => BeepSeverity::Default,
        }
    }
}

impl std::fmt::Display for BeepSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
