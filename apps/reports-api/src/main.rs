//! 高级报表 HTTP API：按调用方权限回答即席统计查询。

mod handlers;
mod middleware;
mod routes;
mod utils;

use reports_auth::{AuthService, IdentityResolver, JwtManager};
use reports_config::AppConfig;
use reports_engine::{InMemoryEngineFactory, OccurrenceStore};
use reports_pipeline::ReportPipeline;
use reports_telemetry::init_tracing;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn IdentityResolver>,
    pub pipeline: ReportPipeline,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    init_tracing();

    let store = match &config.fixture_path {
        Some(path) => OccurrenceStore::from_path(path)?,
        None => {
            tracing::warn!("REPORTS_FIXTURE_PATH not set, in-memory engine starts empty");
            OccurrenceStore::default()
        }
    };
    let engines = Arc::new(InMemoryEngineFactory::new(Arc::new(store)));
    let pipeline = ReportPipeline::new(
        engines,
        config.engine_timeout_ms.map(Duration::from_millis),
    );
    // 服务端只校验 token，不签发，TTL 不参与
    let auth = Arc::new(AuthService::new(JwtManager::new(config.jwt_secret.clone(), 0)));
    let state = AppState { auth, pipeline };

    let app = routes::create_app(state);
    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!(addr = %config.http_addr, "reports api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
