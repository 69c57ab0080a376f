//! Workflow Adapter - Dify 工作流客户端实现

mod dify_client;

pub use dify_client::*;
