//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::infrastructure::adapters::DEFAULT_DIFY_API_URL;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// Dify 工作流配置
    #[serde(default)]
    pub dify: DifyConfig,

    /// 媒体文件配置
    #[serde(default)]
    pub assets: AssetsConfig,

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

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default = "default_static_enabled")]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,

    /// URL 路径前缀
    #[serde(default = "default_static_path")]
    pub path: String,
}

fn default_static_enabled() -> bool {
    true
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_static_path() -> String {
    "/static".to_string()
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_static_enabled(),
            dir: default_static_dir(),
            path: default_static_path(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dify 工作流配置
#[derive(Debug, Clone, Deserialize)]
pub struct DifyConfig {
    /// API Key（来自 DIFY_API_KEY），缺失时 /chat/ 返回 500
    #[serde(default)]
    pub api_key: Option<String>,

    /// 工作流运行端点（来自 DIFY_API_URL）
    #[serde(default = "default_dify_api_url")]
    pub api_url: String,

    /// 上报给工作流的用户标识
    #[serde(default = "default_dify_user")]
    pub user: String,

    /// 请求超时时间（秒），0 表示不设超时
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_dify_api_url() -> String {
    DEFAULT_DIFY_API_URL.to_string()
}

fn default_dify_user() -> String {
    "web-user".to_string()
}

impl Default for DifyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_dify_api_url(),
            user: default_dify_user(),
            timeout_secs: 0,
        }
    }
}

impl DifyConfig {
    /// API Key 是否可用
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

/// 媒体文件配置
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// 媒体根目录
    #[serde(default = "default_assets_base_dir")]
    pub base_dir: PathBuf,

    /// `/video/<filename>` 对应的子目录
    #[serde(default = "default_video_subdir")]
    pub video_subdir: PathBuf,
}

fn default_assets_base_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_video_subdir() -> PathBuf {
    PathBuf::from("chat_app")
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_dir: default_assets_base_dir(),
            video_subdir: default_video_subdir(),
        }
    }
}

impl AssetsConfig {
    /// 媒体目录完整路径
    pub fn video_dir(&self) -> PathBuf {
        self.base_dir.join(&self.video_subdir)
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
