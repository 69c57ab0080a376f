//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod asset_store;
mod workflow_client;

pub use asset_store::{Asset, AssetError, AssetStorePort};
pub use workflow_client::{WorkflowClientPort, WorkflowError, WorkflowRunRequest};
