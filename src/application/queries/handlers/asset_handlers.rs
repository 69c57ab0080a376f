//! Asset Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::AssetStorePort;
use crate::application::queries::asset_queries::{GetAssetQuery, GetAssetResponse};

/// GetAsset Handler - 读取媒体文件
pub struct GetAssetHandler {
    asset_store: Arc<dyn AssetStorePort>,
}

impl GetAssetHandler {
    pub fn new(asset_store: Arc<dyn AssetStorePort>) -> Self {
        Self { asset_store }
    }

    pub async fn handle(&self, query: GetAssetQuery) -> Result<GetAssetResponse, ApplicationError> {
        let asset = self.asset_store.read(&query.filename).await?;

        tracing::debug!(
            filename = %query.filename,
            size = asset.data.len(),
            content_type = asset.content_type,
            "Asset loaded"
        );

        Ok(GetAssetResponse {
            data: asset.data,
            content_type: asset.content_type,
        })
    }
}
