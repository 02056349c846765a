//! 稳定的报表 API 响应契约。

use serde::{Deserialize, Serialize};

/// 成功响应允许的跨域请求头。
pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "GET,PUT,OPTIONS";
pub const CORS_ALLOW_HEADERS_SUCCESS: &str = "authorization, x-api-key, content-type";
/// 失败响应不声明 content-type。
pub const CORS_ALLOW_HEADERS_ERROR: &str = "authorization, x-api-key";

/// 单条错误对象。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub status: String,
    pub title: String,
}

impl ErrorObject {
    pub fn new(code: u16, title: impl Into<String>) -> Self {
        Self {
            status: code.to_string(),
            title: title.into(),
        }
    }
}

/// 失败响应体：`{"errors": [...]}`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<ErrorObject>,
}

impl ErrorEnvelope {
    /// 单条错误，status 取 HTTP 状态码的字符串形式。
    pub fn single(code: u16, title: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorObject::new(code, title)],
        }
    }
}

/// 健康检查返回结构。
#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub ok: bool,
}

/// 报表指标快照返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub requests: u64,
    pub rejected_bad_request: u64,
    pub rejected_unauthorized: u64,
    pub dispatched_user_stats: u64,
    pub dispatched_counts: u64,
    pub dispatched_recorded_taxa_list: u64,
    pub engine_failures: u64,
    pub engine_latency_ms_total: u64,
    pub engine_latency_ms_count: u64,
}
