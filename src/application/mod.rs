//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（WorkflowClient、AssetStore）
//! - commands: 问答转发命令及处理器
//! - queries: 媒体文件查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{RelayQueryHandler, RelaySettings},
    RelayQueryCommand, RelayQueryResponse,
};

pub use error::ApplicationError;

pub use ports::{
    // Asset store
    Asset,
    AssetError,
    AssetStorePort,
    // Workflow client
    WorkflowClientPort,
    WorkflowError,
    WorkflowRunRequest,
};

pub use queries::{handlers::GetAssetHandler, GetAssetQuery, GetAssetResponse};
