//! HTTP Error Handling
//!
//! 错误统一序列化为 `{"error": "..."}`，并使用真实的 HTTP 状态码

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 面向浏览器的错误文案
pub mod messages {
    pub const API_KEY_MISSING: &str = "DIFY_API_KEYが設定されていません";
    pub const POST_REQUIRED: &str = "POSTリクエストが必要です";
    pub const ERROR_PREFIX: &str = "エラーが発生しました";
    pub const FILE_NOT_FOUND_PREFIX: &str = "ファイルが見つかりません";
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    MethodNotAllowed(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                msg
            }
            ApiError::MethodNotAllowed(msg) => {
                tracing::warn!(error = %msg, "Method not allowed");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                msg
            }
        };

        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::MissingApiKey => {
                ApiError::Internal(messages::API_KEY_MISSING.to_string())
            }
            ApplicationError::Upstream(msg) | ApplicationError::MalformedResponse(msg) => {
                ApiError::Internal(format!("{}: {}", messages::ERROR_PREFIX, msg))
            }
            // 穿越请求与普通缺失文件一样按 404 返回
            ApplicationError::AssetNotFound(msg)
            | ApplicationError::AssetRejected(msg)
            | ApplicationError::AssetIo(msg) => {
                ApiError::NotFound(format!("{}: {}", messages::FILE_NOT_FOUND_PREFIX, msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_mapping() {
        let e: ApiError = ApplicationError::MissingApiKey.into();
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let e: ApiError = ApplicationError::MalformedResponse("missing field `data`".into()).into();
        match e {
            ApiError::Internal(msg) => {
                assert_eq!(msg, "エラーが発生しました: missing field `data`");
            }
            other => panic!("unexpected: {other:?}"),
        }

        let e: ApiError = ApplicationError::AssetRejected("../x".into()).into();
        assert_eq!(e.status(), StatusCode::NOT_FOUND);

        let e: ApiError = ApplicationError::AssetIo("permission denied".into()).into();
        assert_eq!(e.status(), StatusCode::NOT_FOUND);
    }
}
