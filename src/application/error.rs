//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{AssetError, WorkflowError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 未配置 API Key，未发出任何外部请求
    #[error("DIFY_API_KEY is not configured")]
    MissingApiKey,

    /// 工作流调用失败（网络、超时、非 2xx）
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// 工作流返回内容无法解析
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    /// 媒体文件不存在
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// 媒体文件路径被拒绝（目录穿越）
    #[error("Asset rejected: {0}")]
    AssetRejected(String),

    /// 媒体文件读取失败
    #[error("Asset IO error: {0}")]
    AssetIo(String),
}

impl From<WorkflowError> for ApplicationError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::InvalidResponse(msg) => Self::MalformedResponse(msg),
            other => Self::Upstream(other.to_string()),
        }
    }
}

impl From<AssetError> for ApplicationError {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::NotFound(msg) => Self::AssetNotFound(msg),
            AssetError::Forbidden(msg) => Self::AssetRejected(msg),
            AssetError::IoError(msg) => Self::AssetIo(msg),
        }
    }
}
