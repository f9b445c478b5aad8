//! 应用层 - 查询（只读）

mod sound_queries;

pub mod handlers;

pub use sound_queries::*;
