//! Workflow Client Port - 外部工作流 API 抽象
//!
//! 定义工作流调用的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 工作流调用错误
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 工作流运行请求
#[derive(Debug, Clone)]
pub struct WorkflowRunRequest {
    /// Bearer token
    pub api_key: String,
    /// 用户输入的问题
    pub query: String,
    /// 上报给工作流的用户标识
    pub user: String,
}

/// Workflow Client Port
///
/// 以 blocking 模式执行一次工作流，返回 `data.outputs.output` 文本
#[async_trait]
pub trait WorkflowClientPort: Send + Sync {
    async fn run(&self, request: WorkflowRunRequest) -> Result<String, WorkflowError>;
}
