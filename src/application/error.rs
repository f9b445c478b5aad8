//! 应用层错误定义

use thiserror::Error;

use crate::application::ports::SubmitError;

/// 应用层错误
///
/// 只表示基础设施问题；播放失败和未知 cue 都不会出现在这里
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 播放子系统不可用（未初始化或已关闭）
    #[error("Playback subsystem unavailable: {0}")]
    Unavailable(String),
}

impl From<SubmitError> for ApplicationError {
    fn from(err: SubmitError) -> Self {
        Self::Unavailable(err.to_string())
    }
}
