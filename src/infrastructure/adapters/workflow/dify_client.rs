//! Dify Workflow Client - 调用 Dify 工作流 API
//!
//! 实现 WorkflowClientPort trait
//!
//! 外部 API:
//! POST https://djartipy.com/v1/workflows/run
//! Header: Authorization: Bearer <api_key>
//! Request: {"inputs": {"query": "..."}, "response_mode": "blocking", "user": "web-user"}
//! Response: {"data": {"outputs": {"output": "..."}}, ...}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{WorkflowClientPort, WorkflowError, WorkflowRunRequest};

pub const DEFAULT_DIFY_API_URL: &str = "https://djartipy.com/v1/workflows/run";

#[derive(Debug, Serialize)]
struct DifyRunRequest<'a> {
    inputs: DifyInputs<'a>,
    response_mode: &'static str,
    user: &'a str,
}

#[derive(Debug, Serialize)]
struct DifyInputs<'a> {
    query: &'a str,
}

/// 只关心 `data.outputs.output`，其余字段忽略
#[derive(Debug, Deserialize)]
struct DifyRunResponse {
    data: DifyRunData,
}

#[derive(Debug, Deserialize)]
struct DifyRunData {
    outputs: DifyOutputs,
}

#[derive(Debug, Deserialize)]
struct DifyOutputs {
    output: String,
}

/// Dify 客户端配置
#[derive(Debug, Clone)]
pub struct DifyClientConfig {
    /// 工作流运行端点
    pub api_url: String,
    /// 请求超时时间（秒），0 表示不设超时
    pub timeout_secs: u64,
}

impl Default for DifyClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_DIFY_API_URL.to_string(),
            timeout_secs: 0,
        }
    }
}

impl DifyClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Dify 工作流客户端
///
/// 单次请求，不重试
pub struct DifyWorkflowClient {
    client: Client,
    config: DifyClientConfig,
}

impl DifyWorkflowClient {
    pub fn new(config: DifyClientConfig) -> Result<Self, WorkflowError> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| WorkflowError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl WorkflowClientPort for DifyWorkflowClient {
    async fn run(&self, request: WorkflowRunRequest) -> Result<String, WorkflowError> {
        let body = DifyRunRequest {
            inputs: DifyInputs {
                query: &request.query,
            },
            response_mode: "blocking",
            user: &request.user,
        };

        tracing::debug!(
            url = %self.config.api_url,
            query_len = request.query.len(),
            "Sending workflow run request"
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&request.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WorkflowError::Timeout
                } else if e.is_connect() {
                    WorkflowError::NetworkError(format!("Cannot connect to workflow API: {}", e))
                } else {
                    WorkflowError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(WorkflowError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| WorkflowError::NetworkError(format!("Failed to read body: {}", e)))?;

        let parsed: DifyRunResponse = serde_json::from_slice(&bytes)
            .map_err(|e| WorkflowError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            output_len = parsed.data.outputs.output.len(),
            "Workflow run completed"
        );

        Ok(parsed.data.outputs.output)
    }
}
