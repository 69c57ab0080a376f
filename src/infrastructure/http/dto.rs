//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::RelayQueryResponse;

/// POST /chat/ 请求体
///
/// 缺失 `query` 时为空字符串
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub query: String,
}

impl ChatRequest {
    /// 解析请求体，任何解析失败都按空问题处理
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Unparseable chat body, using empty query");
            Self::default()
        })
    }
}

/// POST /chat/ 成功响应
///
/// 没有参考箇所时 `start_time` / `end_time` 不出现
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u32>,
}

impl From<RelayQueryResponse> for ChatResponse {
    fn from(r: RelayQueryResponse) -> Self {
        Self {
            response_text: r.response_text,
            start_time: r.segment.map(|s| s.start_seconds),
            end_time: r.segment.map(|s| s.end_seconds),
        }
    }
}
