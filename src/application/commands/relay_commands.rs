//! Relay Commands - 问答转发命令

use crate::domain::ExtractedSegment;

/// 转发问题到工作流
#[derive(Debug, Clone, Default)]
pub struct RelayQueryCommand {
    pub query: String,
}

/// 转发结果
#[derive(Debug, Clone)]
pub struct RelayQueryResponse {
    pub response_text: String,
    /// 回答中第一个参考箇所，没有则为 None
    pub segment: Option<ExtractedSegment>,
}
