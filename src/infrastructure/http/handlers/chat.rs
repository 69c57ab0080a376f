//! Chat Handlers - 问答转发

use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use crate::application::RelayQueryCommand;
use crate::infrastructure::http::dto::{ChatRequest, ChatResponse};
use crate::infrastructure::http::error::{messages, ApiError};
use crate::infrastructure::http::state::AppState;

/// POST /chat/
///
/// 请求体按原始字节读取，畸形 JSON 也不会被提取器拒绝
pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    let req = ChatRequest::from_body(&body);

    let result = state
        .relay_handler
        .handle(RelayQueryCommand { query: req.query })
        .await?;

    Ok(Json(result.into()))
}

/// /chat/ 上的非 POST 请求
pub async fn chat_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed(messages::POST_REQUIRED.to_string())
}
