//! 路由定义
//!
//! - 健康检查：/health, /livez
//! - 报表：/reports/:report（GET 与 OPTIONS 预检）
//! - 指标：/metrics
//!
//! 同时挂载在 / 与 /api/ 两种前缀下。

use super::AppState;
use super::handlers::*;
use crate::middleware::request_context;
use axum::{Router, middleware, routing::get};

/// 创建 API 路由
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/livez", get(livez))
        .route("/metrics", get(get_metrics))
        .route("/reports/:report", get(get_report).options(report_preflight))
}

/// 组装完整应用：双前缀路由、状态与请求上下文中间件。
pub fn create_app(state: AppState) -> Router {
    let api = create_api_router();
    Router::new()
        .merge(api.clone())
        .nest("/api", api)
        .with_state(state)
        .layer(middleware::from_fn(request_context))
}
