//! 报表指标快照。
//!
//! - GET /metrics

use api_contract::MetricsSnapshotDto;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use reports_telemetry::metrics;

use crate::{AppState, middleware::require_caller};

pub async fn get_metrics(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Err(response) = require_caller(&state, &headers) {
        return response;
    }

    let snapshot = metrics().snapshot();
    (
        StatusCode::OK,
        Json(MetricsSnapshotDto {
            requests: snapshot.requests,
            rejected_bad_request: snapshot.rejected_bad_request,
            rejected_unauthorized: snapshot.rejected_unauthorized,
            dispatched_user_stats: snapshot.dispatched_user_stats,
            dispatched_counts: snapshot.dispatched_counts,
            dispatched_recorded_taxa_list: snapshot.dispatched_recorded_taxa_list,
            engine_failures: snapshot.engine_failures,
            engine_latency_ms_total: snapshot.engine_latency_ms_total,
            engine_latency_ms_count: snapshot.engine_latency_ms_count,
        }),
    )
        .into_response()
}
