//! Hookbell - Hook 事件提示音服务
//!
//! 通过 HTTP 接收事件通知，映射为提示音 cue，在后台播放，不阻塞调用方。
//!
//! 领域层 (domain/):
//! - Cue Catalog: cue id → 音频文件（只读）
//! - Event Resolver: 事件标签 → cue id（固定映射，未知标签兜底）
//!
//! 应用层 (application/):
//! - Ports: PlaybackBackend, AlertBeeper, DispatchQueue
//! - CueDispatcher: 解析资源、选择后端、消化所有播放失败
//! - Commands / Queries: HTTP 层使用的处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: axum 路由
//! - Worker: 固定大小的播放池 + 有界队列
//! - Adapters: rodio / 外部播放器 / 系统提示音

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod test_support;

pub use config::{load_config, AppConfig};
