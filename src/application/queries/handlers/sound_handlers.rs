//! Sound Query Handlers

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::queries::ListSounds;
use crate::domain::CueCatalog;

/// 提示音目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundListResponse {
    pub available_sounds: BTreeMap<String, String>,
    pub base_path: String,
}

/// ListSounds Handler
///
/// 直接读取启动时加载的目录，与播放历史无关
pub struct ListSoundsHandler {
    catalog: Arc<CueCatalog>,
}

impl ListSoundsHandler {
    pub fn new(catalog: Arc<CueCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, _query: ListSounds) -> SoundListResponse {
        SoundListResponse {
            available_sounds: self.catalog.files().clone(),
            base_path: self.catalog.base_path().display().to_string(),
        }
    }
}
