//! Reference Segment - 回答文本中的参考箇所
//!
//! 工作流回答中可能嵌入 `参考箇所: [M:SS-M:SS]` 标记，
//! 指向讲义音视频中的一个时间区间。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// 参考箇所标记（分钟 1-2 位，秒固定 2 位）
static REFERENCE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"参考箇所: \[(\d{1,2}:\d{2})-(\d{1,2}:\d{2})\]").expect("invalid marker regex")
});

/// 从回答文本中提取出的时间区间（秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtractedSegment {
    pub start_seconds: u32,
    pub end_seconds: u32,
}

/// 将 `M:SS` / `MM:SS` 转换为总秒数
///
/// 不做范围校验：`99:99` 会得到 6039。溢出 u32 时返回 None。
pub fn timestamp_to_seconds(token: &str) -> Option<u32> {
    let (minutes, seconds) = token.split_once(':')?;
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    minutes.checked_mul(60)?.checked_add(seconds)
}

/// 提取文本中第一个参考箇所
///
/// 没有匹配时返回 `None`，这不是错误。
pub fn extract_segment(text: &str) -> Option<ExtractedSegment> {
    let captures = REFERENCE_MARKER.captures(text)?;
    let start_seconds = timestamp_to_seconds(captures.get(1)?.as_str())?;
    let end_seconds = timestamp_to_seconds(captures.get(2)?.as_str())?;

    Some(ExtractedSegment {
        start_seconds,
        end_seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_to_seconds() {
        assert_eq!(timestamp_to_seconds("1:05"), Some(65));
        assert_eq!(timestamp_to_seconds("12:30"), Some(750));
        assert_eq!(timestamp_to_seconds("0:00"), Some(0));
    }

    #[test]
    fn test_timestamp_without_bounds_check() {
        assert_eq!(timestamp_to_seconds("99:99"), Some(6039));
    }

    #[test]
    fn test_timestamp_overflow_is_none() {
        assert_eq!(timestamp_to_seconds("4294967295:00"), None);
        assert_eq!(timestamp_to_seconds("71582788:15"), Some(u32::MAX));
        assert_eq!(timestamp_to_seconds("71582788:16"), None);
    }

    #[test]
    fn test_timestamp_rejects_garbage() {
        assert_eq!(timestamp_to_seconds("105"), None);
        assert_eq!(timestamp_to_seconds("a:05"), None);
    }

    #[test]
    fn test_extract_single_digit_minutes() {
        let text = "特許権の存続期間は出願から20年です。参考箇所: [1:05-2:10]";
        let segment = extract_segment(text).unwrap();
        assert_eq!(segment.start_seconds, 65);
        assert_eq!(segment.end_seconds, 130);
    }

    #[test]
    fn test_extract_two_digit_minutes() {
        let text = "参考箇所: [12:00-13:45] について説明します";
        let segment = extract_segment(text).unwrap();
        assert_eq!(segment.start_seconds, 720);
        assert_eq!(segment.end_seconds, 825);
    }

    #[test]
    fn test_extract_accepts_out_of_range_seconds() {
        let segment = extract_segment("参考箇所: [99:99-99:99]").unwrap();
        assert_eq!(segment.start_seconds, 6039);
        assert_eq!(segment.end_seconds, 6039);
    }

    #[test]
    fn test_only_first_marker_is_used() {
        let text = "参考箇所: [0:10-0:20]\n参考箇所: [5:00-6:00]";
        let segment = extract_segment(text).unwrap();
        assert_eq!(segment.start_seconds, 10);
        assert_eq!(segment.end_seconds, 20);
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(extract_segment("回答のみです。"), None);
        assert_eq!(extract_segment(""), None);
    }

    #[test]
    fn test_malformed_markers_do_not_match() {
        // 秒は 2 桁必須
        assert_eq!(extract_segment("参考箇所: [1:5-2:10]"), None);
        // 分は最大 2 桁
        assert_eq!(extract_segment("参考箇所: [100:00-101:00]"), None);
        // 全角コロンやスペース無しは対象外
        assert_eq!(extract_segment("参考箇所：[1:05-2:10]"), None);
        assert_eq!(extract_segment("参考箇所:[1:05-2:10]"), None);
        // en dash は対象外
        assert_eq!(extract_segment("参考箇所: [1:05–2:10]"), None);
    }
}
