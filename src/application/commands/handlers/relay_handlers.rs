//! Relay Command Handlers

use std::sync::Arc;

use crate::application::commands::relay_commands::{RelayQueryCommand, RelayQueryResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{WorkflowClientPort, WorkflowRunRequest};
use crate::domain::extract_segment;

/// 转发所需的配置
#[derive(Debug, Clone)]
pub struct RelaySettings {
    /// 未设置时每次请求都返回 MissingApiKey
    pub api_key: Option<String>,
    /// 上报给工作流的用户标识
    pub user: String,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            api_key: None,
            user: "web-user".to_string(),
        }
    }
}

/// RelayQuery Handler - 转发问题并提取参考箇所
pub struct RelayQueryHandler {
    workflow_client: Arc<dyn WorkflowClientPort>,
    settings: RelaySettings,
}

impl RelayQueryHandler {
    pub fn new(workflow_client: Arc<dyn WorkflowClientPort>, settings: RelaySettings) -> Self {
        Self {
            workflow_client,
            settings,
        }
    }

    /// 是否持有可用的 API Key
    pub fn is_configured(&self) -> bool {
        self.settings
            .api_key
            .as_deref()
            .is_some_and(|key| !key.is_empty())
    }

    pub async fn handle(&self, cmd: RelayQueryCommand) -> Result<RelayQueryResponse, ApplicationError> {
        let api_key = self
            .settings
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or(ApplicationError::MissingApiKey)?;

        let request = WorkflowRunRequest {
            api_key,
            query: cmd.query,
            user: self.settings.user.clone(),
        };

        let response_text = self.workflow_client.run(request).await?;
        let segment = extract_segment(&response_text);

        tracing::info!(
            response_len = response_text.len(),
            segment = ?segment,
            "Workflow answer relayed"
        );

        Ok(RelayQueryResponse {
            response_text,
            segment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::WorkflowError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct StubWorkflowClient {
        calls: AtomicUsize,
        last_request: Mutex<Option<WorkflowRunRequest>>,
        answer: Result<String, fn() -> WorkflowError>,
    }

    impl StubWorkflowClient {
        fn answering(text: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
                answer: Ok(text.to_string()),
            }
        }

        fn failing(err: fn() -> WorkflowError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
                answer: Err(err),
            }
        }
    }

    #[async_trait]
    impl WorkflowClientPort for StubWorkflowClient {
        async fn run(&self, request: WorkflowRunRequest) -> Result<String, WorkflowError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request);
            match &self.answer {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    fn settings_with_key() -> RelaySettings {
        RelaySettings {
            api_key: Some("app-test".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_missing_key_skips_upstream() {
        let client = Arc::new(StubWorkflowClient::answering("unused"));
        let handler = RelayQueryHandler::new(client.clone(), RelaySettings::default());

        let result = handler
            .handle(RelayQueryCommand {
                query: "特許とは".into(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::MissingApiKey)));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_key_counts_as_missing() {
        let client = Arc::new(StubWorkflowClient::answering("unused"));
        let settings = RelaySettings {
            api_key: Some(String::new()),
            ..Default::default()
        };
        let handler = RelayQueryHandler::new(client.clone(), settings);

        let result = handler.handle(RelayQueryCommand::default()).await;
        assert!(matches!(result, Err(ApplicationError::MissingApiKey)));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_forwards_query_and_extracts_segment() {
        let client = Arc::new(StubWorkflowClient::answering(
            "新規性が必要です。参考箇所: [1:05-2:10]",
        ));
        let handler = RelayQueryHandler::new(client.clone(), settings_with_key());

        let response = handler
            .handle(RelayQueryCommand {
                query: "特許要件は？".into(),
            })
            .await
            .unwrap();

        assert_eq!(response.response_text, "新規性が必要です。参考箇所: [1:05-2:10]");
        let segment = response.segment.unwrap();
        assert_eq!(segment.start_seconds, 65);
        assert_eq!(segment.end_seconds, 130);

        let sent = client.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(sent.api_key, "app-test");
        assert_eq!(sent.query, "特許要件は？");
        assert_eq!(sent.user, "web-user");
    }

    #[tokio::test]
    async fn test_answer_without_marker_has_no_segment() {
        let client = Arc::new(StubWorkflowClient::answering("わかりません"));
        let handler = RelayQueryHandler::new(client, settings_with_key());

        let response = handler.handle(RelayQueryCommand::default()).await.unwrap();
        assert_eq!(response.response_text, "わかりません");
        assert!(response.segment.is_none());
    }

    #[tokio::test]
    async fn test_upstream_and_malformed_errors_are_distinct() {
        let client = Arc::new(StubWorkflowClient::failing(|| {
            WorkflowError::NetworkError("connection refused".into())
        }));
        let handler = RelayQueryHandler::new(client.clone(), settings_with_key());
        let result = handler.handle(RelayQueryCommand::default()).await;
        assert!(matches!(result, Err(ApplicationError::Upstream(_))));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);

        let client = Arc::new(StubWorkflowClient::failing(|| {
            WorkflowError::InvalidResponse("missing field `outputs`".into())
        }));
        let handler = RelayQueryHandler::new(client, settings_with_key());
        let result = handler.handle(RelayQueryCommand::default()).await;
        assert!(matches!(result, Err(ApplicationError::MalformedResponse(_))));
    }
}
