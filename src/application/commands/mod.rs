//! 应用层 - 命令
//!
//! 所有命令都只负责把播放任务放入队列，不等待播放结果

mod notify_commands;

pub mod handlers;

pub use notify_commands::*;
