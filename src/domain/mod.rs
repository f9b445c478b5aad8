//! Domain Layer - 领域层
//!
//! 包含:
//! - Cue Context: 提示音目录（cue id → 音频文件）
//! - Event Resolver: 事件标签 → cue id 的固定映射
//! - Beep Severity: 系统提示音级别

pub mod cue;
pub mod event;
pub mod severity;

pub use cue::{CatalogError, CueCatalog, ResolvedCue, ResourceHandle, FALLBACK_CUE};
pub use event::{is_known_event, resolve_cue, EVENT_CUE_MAP};
pub use severity::BeepSeverity;
