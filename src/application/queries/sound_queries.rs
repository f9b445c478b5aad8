//! Sound Queries

/// 列出提示音目录
#[derive(Debug, Clone, Default)]
pub struct ListSounds;
