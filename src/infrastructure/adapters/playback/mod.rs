//! Playback Adapters - 播放后端实现

mod command_backend;
#[cfg(feature = "native-audio")]
mod rodio_backend;
mod system_beep;

use std::sync::Arc;

pub use command_backend::{CommandBackend, PlayerCommand};
#[cfg(feature = "native-audio")]
pub use rodio_backend::RodioBackend;
pub use system_beep::SystemBeep;

use crate::application::BackendRegistry;
use crate::config::DispatcherConfig;

/// 按配置顺序构建后端注册表
///
/// 返回注册表和系统提示音实例（`/test/beep` 使用，与后端选择无关）
pub fn build_registry(config: &DispatcherConfig) -> (BackendRegistry, Arc<SystemBeep>) {
    let beep = Arc::new(SystemBeep::detect());
    let mut registry = BackendRegistry::new();

    for name in &config.backends {
        match name.as_str() {
            "rodio" => register_rodio(&mut registry),
            "command" => registry.register(Arc::new(CommandBackend::detect(&config.players))),
            "beep" => registry.register(beep.clone()),
            other => tracing::warn!(backend = %other, "Unknown playback backend ignored"),
        }
    }

    (registry, beep)
}

#[cfg(feature = "native-audio")]
fn register_rodio(registry: &mut BackendRegistry) {
    registry.register(Arc::new(RodioBackend::detect()));
}

#[cfg(not(feature = "native-audio"))]
fn register_rodio(_registry: &mut BackendRegistry) {
    tracing::debug!("rodio backend not compiled in (enable the `native-audio` feature)");
}
