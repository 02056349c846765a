//! HTTP 响应辅助函数
//!
//! 成功与失败响应都带跨域头；失败响应体统一为 `{"errors": [...]}`，
//! 只暴露稳定的状态码与标题，不包含内部错误细节。

use api_contract::{
    CORS_ALLOW_HEADERS_ERROR, CORS_ALLOW_HEADERS_SUCCESS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN,
    ErrorEnvelope,
};
use axum::{
    Json,
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
};
use reports_auth::AuthError;
use reports_pipeline::ReportError;
use serde_json::Value;

const TITLE_UNAUTHORIZED: &str = "Unauthorized.";
const TITLE_INTERNAL: &str = "Internal Server Error.";

fn cors_headers(allow_headers: &'static str) -> [(HeaderName, &'static str); 3] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, CORS_ALLOW_ORIGIN),
        (header::ACCESS_CONTROL_ALLOW_METHODS, CORS_ALLOW_METHODS),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, allow_headers),
    ]
}

/// 报表成功响应：引擎输出原样返回。
pub fn report_success(output: Value) -> Response {
    (
        StatusCode::OK,
        cors_headers(CORS_ALLOW_HEADERS_SUCCESS),
        Json(output),
    )
        .into_response()
}

/// 预检响应。
pub fn preflight_response() -> Response {
    (
        StatusCode::NO_CONTENT,
        cors_headers(CORS_ALLOW_HEADERS_SUCCESS),
    )
        .into_response()
}

/// 错误信封响应（支持调用方提供的错误列表）。
pub fn error_response(status: StatusCode, envelope: ErrorEnvelope) -> Response {
    (status, cors_headers(CORS_ALLOW_HEADERS_ERROR), Json(envelope)).into_response()
}

/// 单条错误响应。
pub fn single_error(status: StatusCode, title: impl Into<String>) -> Response {
    error_response(status, ErrorEnvelope::single(status.as_u16(), title))
}

/// 流水线错误响应。
pub fn report_error(err: ReportError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if err.is_engine_failure() {
        return single_error(status, TITLE_INTERNAL);
    }
    single_error(status, err.to_string())
}

/// 认证错误响应
pub fn auth_error() -> Response {
    single_error(StatusCode::UNAUTHORIZED, TITLE_UNAUTHORIZED)
}

/// 认证内部错误响应
pub fn internal_auth_error(err: AuthError) -> Response {
    tracing::error!(error = %err, "identity resolution failed");
    single_error(StatusCode::INTERNAL_SERVER_ERROR, TITLE_INTERNAL)
}
