//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 端口定义（PlaybackBackend、AlertBeeper、DispatchQueue）
//! - dispatcher: cue 解析与播放（在 worker 上执行）
//! - commands: 通知命令及处理器
//! - queries: 只读查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod dispatcher;
pub mod error;
pub mod ports;
pub mod queries;

pub use commands::{
    handlers::{NotifyCustomHandler, NotifyHookHandler, TestBeepHandler, TestSoundHandler},
    NotifyCustomCommand, NotifyHookCommand, NotifyResponse, TestBeepCommand, TestSoundCommand,
};
pub use dispatcher::{BackendRegistry, CueDispatcher};
pub use error::ApplicationError;
pub use ports::{
    AlertBeeper, DispatchQueuePort, PlaybackBackend, PlaybackError, PlaybackJob, PlaybackKind,
    SubmitError,
};
pub use queries::{
    handlers::{ListSoundsHandler, SoundListResponse},
    ListSounds,
};
