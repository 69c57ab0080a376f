//! Application State
//!
//! 所有 handler 共享的只读状态

use std::sync::Arc;

use crate::application::{
    AssetStorePort, GetAssetHandler, RelayQueryHandler, RelaySettings, WorkflowClientPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub relay_handler: RelayQueryHandler,

    // ========== Query Handlers ==========
    pub get_asset_handler: GetAssetHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        workflow_client: Arc<dyn WorkflowClientPort>,
        asset_store: Arc<dyn AssetStorePort>,
        relay_settings: RelaySettings,
    ) -> Self {
        Self {
            relay_handler: RelayQueryHandler::new(workflow_client, relay_settings),
            get_asset_handler: GetAssetHandler::new(asset_store),
        }
    }
}
