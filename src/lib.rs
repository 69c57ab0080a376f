//! Lecture Chat - 讲义问答转发服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - 参考箇所提取与时间换算
//!
//! 应用层 (application/):
//! - Ports: WorkflowClient, AssetStore
//! - Commands: 问答转发
//! - Queries: 媒体文件读取
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: axum 路由与 handler
//! - Adapters: Dify 客户端, 文件系统媒体存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
