//! Application State
//!
//! 启动时构建一次，HTTP 层只读共享

use std::sync::Arc;

use crate::application::{
    DispatchQueuePort, ListSoundsHandler, NotifyCustomHandler, NotifyHookHandler,
    TestBeepHandler, TestSoundHandler,
};
use crate::domain::CueCatalog;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub queue: Arc<dyn DispatchQueuePort>,
    /// 选中的播放后端名称，None 表示没有可用后端
    pub audio_backend: Option<&'static str>,

    // ========== Command Handlers ==========
    pub notify_hook_handler: NotifyHookHandler,
    pub notify_custom_handler: NotifyCustomHandler,
    pub test_sound_handler: TestSoundHandler,
    pub test_beep_handler: TestBeepHandler,

    // ========== Query Handlers ==========
    pub list_sounds_handler: ListSoundsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        queue: Arc<dyn DispatchQueuePort>,
        catalog: Arc<CueCatalog>,
        audio_backend: Option<&'static str>,
    ) -> Self {
        Self {
            queue: queue.clone(),
            audio_backend,

            notify_hook_handler: NotifyHookHandler::new(queue.clone()),
            notify_custom_handler: NotifyCustomHandler::new(queue.clone()),
            test_sound_handler: TestSoundHandler::new(queue.clone()),
            test_beep_handler: TestBeepHandler::new(queue),

            list_sounds_handler: ListSoundsHandler::new(catalog),
        }
    }
}
