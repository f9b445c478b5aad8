//! Worker Layer - Background Playback
//!
//! 实现 PlaybackWorker（固定大小的播放池）与 PlaybackQueue（入队端口）

mod playback_worker;

pub use playback_worker::{playback_channel, PlaybackQueue, PlaybackWorker, PlaybackWorkerConfig};
