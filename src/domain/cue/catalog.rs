//! Cue Context - Catalog

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::errors::CatalogError;
use crate::domain::event::EVENT_CUE_MAP;

/// 兜底提示音
///
/// 未知事件、目录中不存在的 cue id 都会落到这里
pub const FALLBACK_CUE: &str = "general_notification";

/// 提示音目录
///
/// cue id → 相对于 `base_path` 的音频文件。构造时保证包含 [`FALLBACK_CUE`]。
#[derive(Debug, Clone)]
pub struct CueCatalog {
    base_path: PathBuf,
    files: BTreeMap<String, String>,
}

/// 目录查找结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCue<'a> {
    /// 实际使用的 cue id（可能已替换为兜底）
    pub cue_id: &'a str,
    /// 目录中登记的文件名
    pub file: &'a str,
    /// 是否发生了兜底替换
    pub substituted: bool,
}

/// 单次播放使用的音频资源句柄
///
/// 每次 dispatch 重新计算，不做缓存：文件可能随时被添加或删除
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceHandle {
    pub cue_id: String,
    pub path: PathBuf,
}

impl ResourceHandle {
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl CueCatalog {
    /// 创建目录并校验
    pub fn new(
        base_path: impl Into<PathBuf>,
        files: BTreeMap<String, String>,
    ) -> Result<Self, CatalogError> {
        let base_path = base_path.into();
        if base_path.as_os_str().is_empty() {
            return Err(CatalogError::EmptyBasePath);
        }
        if !files.contains_key(FALLBACK_CUE) {
            return Err(CatalogError::MissingFallback(FALLBACK_CUE));
        }
        if let Some((cue_id, _)) = files.iter().find(|(_, file)| file.trim().is_empty()) {
            return Err(CatalogError::EmptyFile(cue_id.clone()));
        }

        Ok(Self { base_path, files })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn files(&self) -> &BTreeMap<String, String> {
        &self.files
    }

    /// 查找 cue，未登记时替换为兜底 cue（只替换一次）
    pub fn lookup<'a>(&'a self, cue_id: &'a str) -> ResolvedCue<'a> {
        if let Some(file) = self.files.get(cue_id) {
            return ResolvedCue {
                cue_id,
                file,
                substituted: false,
            };
        }

        ResolvedCue {
            cue_id: FALLBACK_CUE,
            // 构造时已保证兜底 cue 存在
            file: self.files.get(FALLBACK_CUE).map(String::as_str).unwrap_or_default(),
            substituted: true,
        }
    }

    /// 计算资源句柄：base_path / 文件名
    pub fn resource_for(&self, resolved: &ResolvedCue<'_>) -> ResourceHandle {
        ResourceHandle {
            cue_id: resolved.cue_id.to_string(),
            path: self.base_path.join(resolved.file),
        }
    }

    /// 事件映射中引用、但目录里没有登记的 cue
    pub fn unmapped_event_cues(&self) -> Vec<&'static str> {
        EVENT_CUE_MAP
            .iter()
            .map(|(_, cue)| *cue)
            .filter(|cue| !self.files.contains_key(*cue))
            .collect()
    }
}
