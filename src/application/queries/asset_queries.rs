//! Asset Queries - 媒体文件查询

/// 按文件名获取媒体文件
#[derive(Debug, Clone)]
pub struct GetAssetQuery {
    pub filename: String,
}

/// 媒体文件响应
#[derive(Debug, Clone)]
pub struct GetAssetResponse {
    pub data: Vec<u8>,
    pub content_type: &'static str,
}
