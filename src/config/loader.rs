//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::types::{AppConfig, KNOWN_BACKENDS, MAX_WORKERS};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "HOOKBELL_CONFIG";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `HOOKBELL_`，层级分隔符 `__`）
/// 2. 配置文件（`HOOKBELL_CONFIG` 指定的文件，或 config.toml / config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `HOOKBELL_SERVER__PORT=8899`
/// - `HOOKBELL_SOUNDS__BASE_PATH=/srv/sounds`
/// - `HOOKBELL_DISPATCHER__WORKERS=4`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    load_config_from_path(explicit.as_deref())
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）；sounds.files 的默认值由 serde 提供
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8899)?
        .set_default("sounds.base_path", "sounds")?
        .set_default("dispatcher.workers", 2)?
        .set_default("dispatcher.queue_capacity", 256)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    builder = builder.add_source(
        Environment::with_prefix("HOOKBELL")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.dispatcher.workers == 0 {
        return Err(ConfigError::ValidationError(
            "Dispatcher workers must be at least 1".to_string(),
        ));
    }

    if config.dispatcher.workers > MAX_WORKERS {
        return Err(ConfigError::ValidationError(format!(
            "Dispatcher workers must be at most {}, got {}",
            MAX_WORKERS, config.dispatcher.workers
        )));
    }

    if config.dispatcher.queue_capacity == 0 {
        return Err(ConfigError::ValidationError(
            "Dispatcher queue capacity must be at least 1".to_string(),
        ));
    }

    if let Some(name) = config
        .dispatcher
        .backends
        .iter()
        .find(|name| !KNOWN_BACKENDS.contains(&name.as_str()))
    {
        return Err(ConfigError::ValidationError(format!(
            "Unknown playback backend '{}', expected one of {:?}",
            name, KNOWN_BACKENDS
        )));
    }

    // 兜底 cue 必须存在
    config
        .sounds
        .to_catalog()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Sound Directory: {:?}", config.sounds.base_path);
    tracing::info!("Sound Cues: {}", config.sounds.files.len());
    tracing::info!("Playback Workers: {}", config.dispatcher.workers);
    tracing::info!("Playback Queue Capacity: {}", config.dispatcher.queue_capacity);
    tracing::info!("Playback Backends: {:?}", config.dispatcher.backends);
    if !config.dispatcher.players.is_empty() {
        tracing::info!("External Players: {:?}", config.dispatcher.players);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
