//! Video Handlers - 媒体文件输出
//!
//! 整个文件读入内存后一次性返回。虽然声明 `Accept-Ranges: bytes`，
//! 但不处理 Range 请求，始终返回 200 和完整内容。

use axum::{
    body::Body,
    extract::{rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::application::GetAssetQuery;
use crate::infrastructure::http::error::{messages, ApiError};
use crate::infrastructure::http::state::AppState;

/// GET /video/:filename
///
/// 路径段解码失败（如非 UTF-8 的 `%FF`）同样按文件不存在处理
pub async fn serve_video(
    State(state): State<Arc<AppState>>,
    filename: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(filename) = filename.map_err(|e| {
        ApiError::NotFound(format!("{}: {}", messages::FILE_NOT_FOUND_PREFIX, e.body_text()))
    })?;

    let result = state
        .get_asset_handler
        .handle(GetAssetQuery { filename })
        .await?;

    let content_length = result.data.len();
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, result.content_type.to_string()),
            (header::CONTENT_LENGTH, content_length.to_string()),
            (header::ACCEPT_RANGES, "bytes".to_string()),
        ],
        Body::from(result.data),
    )
        .into_response())
}
