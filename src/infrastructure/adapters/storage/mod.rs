//! Storage Adapter - 本地媒体文件读取

mod file_asset_store;

pub use file_asset_store::{content_type_for, FileAssetStore};
