//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：读取本地媒体文件

mod asset_queries;

pub mod handlers;

pub use asset_queries::*;
