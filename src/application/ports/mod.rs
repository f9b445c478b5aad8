//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod dispatch_queue;
mod playback_backend;

pub use dispatch_queue::{DispatchQueuePort, PlaybackJob, PlaybackKind, SubmitError};
pub use playback_backend::{AlertBeeper, PlaybackBackend, PlaybackError};
