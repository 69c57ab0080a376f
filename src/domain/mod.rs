//! Domain Layer - 领域层
//!
//! 无状态的纯函数：从工作流回答中提取参考箇所

mod reference;

pub use reference::{extract_segment, timestamp_to_seconds, ExtractedSegment};
