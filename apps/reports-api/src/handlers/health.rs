use api_contract::HealthDto;
use axum::{Json, response::IntoResponse};

/// 健康检查端点，无需认证。
pub async fn health() -> impl IntoResponse {
    livez().await
}

/// Liveness 探针：只反映进程存活。
pub async fn livez() -> impl IntoResponse {
    Json(HealthDto { ok: true })
}
