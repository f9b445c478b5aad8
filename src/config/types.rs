//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::{CatalogError, CueCatalog, EVENT_CUE_MAP, FALLBACK_CUE};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 提示音配置
    #[serde(default)]
    pub sounds: SoundsConfig,

    /// 播放调度配置
    #[serde(default)]
    pub dispatcher: DispatcherConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8899
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 提示音配置
#[derive(Debug, Clone, Deserialize)]
pub struct SoundsConfig {
    /// 音频文件根目录
    #[serde(default = "default_base_path")]
    pub base_path: PathBuf,

    /// cue id → 相对于 base_path 的文件名
    #[serde(default = "default_sound_files")]
    pub files: BTreeMap<String, String>,
}

fn default_base_path() -> PathBuf {
    PathBuf::from("sounds")
}

/// 每个内置 cue 对应 `<cue_id>.mp3`
fn default_sound_files() -> BTreeMap<String, String> {
    EVENT_CUE_MAP
        .iter()
        .map(|(_, cue)| *cue)
        .chain(std::iter::once(FALLBACK_CUE))
        .map(|cue| (cue.to_string(), format!("{cue}.mp3")))
        .collect()
}

impl Default for SoundsConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            files: default_sound_files(),
        }
    }
}

impl SoundsConfig {
    /// 构建只读的提示音目录
    pub fn to_catalog(&self) -> Result<CueCatalog, CatalogError> {
        CueCatalog::new(self.base_path.clone(), self.files.clone())
    }
}

/// 播放 worker 数量上限
pub const MAX_WORKERS: usize = 64;

/// 已知的播放后端名称
pub const KNOWN_BACKENDS: &[&str] = &["rodio", "command", "beep"];

/// 播放调度配置
#[derive(Debug, Clone, Deserialize)]
pub struct DispatcherConfig {
    /// 播放 worker 数量（同时进行的播放数）
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// 等待队列容量，满时丢弃新任务
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// 后端探测顺序
    #[serde(default = "default_backends")]
    pub backends: Vec<String>,

    /// 外部播放器候选（为空则使用平台默认列表）
    #[serde(default)]
    pub players: Vec<String>,
}

fn default_workers() -> usize {
    2
}

fn default_queue_capacity() -> usize {
    256
}

fn default_backends() -> Vec<String> {
    KNOWN_BACKENDS.iter().map(|s| s.to_string()).collect()
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            queue_capacity: default_queue_capacity(),
            backends: default_backends(),
            players: Vec::new(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
