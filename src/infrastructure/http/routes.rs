//! HTTP Routes
//!
//! Endpoints:
//! - /                 GET   首页
//! - /chat/            POST  转发问题到工作流（其他方法 405）
//! - /video/:filename  GET   媒体文件
//! - /api/ping         GET   健康检查
//! - /static/*         GET   静态文件目录

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use super::handlers;
use super::state::AppState;
use crate::config::StaticFilesConfig;

/// 创建所有路由
pub fn create_routes(static_files: &StaticFilesConfig) -> Router<Arc<AppState>> {
    let router = Router::new()
        .route("/", get(handlers::index))
        .route(
            "/chat/",
            post(handlers::chat).fallback(handlers::chat_method_not_allowed),
        )
        .route("/video/:filename", get(handlers::serve_video))
        .nest("/api", api_routes());

    if !static_files.enabled {
        return router;
    }

    let serve_dir = ServeDir::new(&static_files.dir);
    let prefix = static_files.path.trim_end_matches('/');
    if prefix.is_empty() {
        router.fallback_service(serve_dir)
    } else {
        router.nest_service(prefix, serve_dir)
    }
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route("/ping", get(handlers::ping))
}
