//! 高级报表 handlers
//!
//! - GET /reports/:report
//! - OPTIONS /reports/:report
//!
//! 查询参数以只读映射整体传入流水线；调用方身份只来自 Bearer token。

use crate::AppState;
use crate::middleware::require_caller;
use crate::utils::response::{preflight_response, report_error, report_success};
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
};
use domain::QueryParams;
use std::collections::HashMap;

pub async fn get_report(
    State(state): State<AppState>,
    Path(report): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let caller = match require_caller(&state, &headers) {
        Ok(caller) => caller,
        Err(response) => return response,
    };
    let query = QueryParams::new(query);
    match state.pipeline.run(&caller, &report, &query).await {
        Ok(output) => report_success(output),
        Err(err) => report_error(err),
    }
}

pub async fn report_preflight() -> Response {
    preflight_response()
}
