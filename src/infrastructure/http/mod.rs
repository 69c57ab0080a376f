//! HTTP Layer
//!
//! - `/`            GET   首页
//! - `/chat/`       POST  问答转发
//! - `/video/:name` GET   媒体文件
//! - `/api/ping`    GET   健康检查
//! - `/static/*`    GET   静态文件（可选）

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{build_router, HttpServer, ServerConfig};
pub use state::AppState;
