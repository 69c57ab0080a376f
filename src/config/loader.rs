//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. `DIFY_API_KEY` / `DIFY_API_URL`
//! 2. 环境变量（前缀 `LECTURE_CHAT_`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File, Map};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::infrastructure::adapters::DEFAULT_DIFY_API_URL;

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

/// Dify 凭据使用的固定环境变量名
pub const DIFY_API_KEY_ENV: &str = "DIFY_API_KEY";
pub const DIFY_API_URL_ENV: &str = "DIFY_API_URL";

/// 加载应用配置
///
/// # 环境变量示例
/// - `DIFY_API_KEY=app-xxxxxxxx`
/// - `DIFY_API_URL=https://api.dify.ai/v1/workflows/run`
/// - `LECTURE_CHAT_SERVER__PORT=8080`
/// - `LECTURE_CHAT_ASSETS__BASE_DIR=/srv/media`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_with_env(config_path, None)
}

/// `env` 为 None 时读取进程环境变量
fn load_with_env(
    config_path: Option<&Path>,
    env: Option<Map<String, String>>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("server.static_files.enabled", true)?
        .set_default("server.static_files.dir", "static")?
        .set_default("server.static_files.path", "/static")?
        .set_default("dify.api_url", DEFAULT_DIFY_API_URL)?
        .set_default("dify.user", "web-user")?
        .set_default("dify.timeout_secs", 0)?
        .set_default("assets.base_dir", "static")?
        .set_default("assets.video_subdir", "chat_app")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量
    // 例如: LECTURE_CHAT_DIFY__TIMEOUT_SECS=60
    builder = builder.add_source(
        Environment::with_prefix("LECTURE_CHAT")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env.clone()),
    );

    // 4. Dify 固定变量名（最高优先级）
    let lookup = |name: &str| match &env {
        Some(map) => map.get(name).cloned(),
        None => std::env::var(name).ok(),
    };
    builder = builder
        .set_override_option("dify.api_key", lookup(DIFY_API_KEY_ENV))?
        .set_override_option("dify.api_url", lookup(DIFY_API_URL_ENV))?;

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

    if config.dify.api_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Dify API URL cannot be empty".to_string(),
        ));
    }

    if !config.dify.api_url.starts_with("http://") && !config.dify.api_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "Dify API URL must be http(s): {}",
            config.dify.api_url
        )));
    }

    if config.assets.base_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Assets base directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Dify API URL: {}", config.dify.api_url);
    tracing::info!(
        "Dify API Key: {}",
        if config.dify.has_api_key() { "<set>" } else { "<missing>" }
    );
    if config.dify.timeout_secs > 0 {
        tracing::info!("Dify Timeout: {}s", config.dify.timeout_secs);
    }
    tracing::info!("Video Directory: {:?}", config.assets.video_dir());
    if config.server.static_files.enabled {
        tracing::info!(
            "Static Files: {} -> {:?}",
            config.server.static_files.path,
            config.server.static_files.dir
        );
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");

    if !config.dify.has_api_key() {
        tracing::warn!("{} is not set, /chat/ will answer with 500", DIFY_API_KEY_ENV);
    }
}
