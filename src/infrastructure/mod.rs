//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod http;
pub mod worker;

pub use adapters::{build_registry, CommandBackend, SystemBeep};
pub use worker::{playback_channel, PlaybackQueue, PlaybackWorker, PlaybackWorkerConfig};
