//! Lecture Chat - 讲义问答转发服务
//!
//! - POST /chat/         转发问题到 Dify 工作流，提取参考箇所
//! - GET  /video/:name   输出本地媒体文件

use std::sync::Arc;

use lecture_chat::application::RelaySettings;
use lecture_chat::config::{load_config, print_config, LogConfig};
use lecture_chat::infrastructure::http::{AppState, HttpServer, ServerConfig};
use lecture_chat::infrastructure::{DifyClientConfig, DifyWorkflowClient, FileAssetStore};

fn init_logging(log: &LogConfig) {
    let log_filter = format!("{},lecture_chat={},tower_http=debug", log.level, log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 中的 DIFY_API_KEY 等
    dotenvy::dotenv().ok();

    // 加载配置（优先级：DIFY_* > 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config.log);

    tracing::info!("Lecture Chat v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // Dify 工作流客户端
    let client_config =
        DifyClientConfig::new(&config.dify.api_url).with_timeout(config.dify.timeout_secs);
    let workflow_client = Arc::new(
        DifyWorkflowClient::new(client_config)
            .map_err(|e| anyhow::anyhow!("Failed to build workflow client: {}", e))?,
    );

    // 媒体文件存储
    let asset_store = Arc::new(FileAssetStore::new(
        &config.assets.base_dir,
        &config.assets.video_subdir,
    ));
    if !asset_store.asset_dir().is_dir() {
        tracing::warn!(
            dir = %asset_store.asset_dir().display(),
            "Video directory does not exist, /video/ will answer with 404"
        );
    }

    let relay_settings = RelaySettings {
        api_key: config.dify.api_key.clone(),
        user: config.dify.user.clone(),
    };

    let state = AppState::new(workflow_client, asset_store, relay_settings);

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_static_files(config.server.static_files.clone());
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
