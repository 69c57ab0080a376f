//! Asset Store Port - 本地媒体文件读取抽象

use async_trait::async_trait;
use thiserror::Error;

/// 媒体文件读取错误
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("File not found: {0}")]
    NotFound(String),

    /// 文件名试图逃出媒体目录
    #[error("Rejected asset path: {0}")]
    Forbidden(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 读取到的媒体文件
#[derive(Debug, Clone)]
pub struct Asset {
    pub data: Vec<u8>,
    pub content_type: &'static str,
}

/// Asset Store Port
#[async_trait]
pub trait AssetStorePort: Send + Sync {
    /// 按文件名读取整个文件
    async fn read(&self, filename: &str) -> Result<Asset, AssetError>;
}
