use api_contract::{
    CORS_ALLOW_HEADERS_ERROR, CORS_ALLOW_HEADERS_SUCCESS, ErrorEnvelope, MetricsSnapshotDto,
};
use serde_json::Value;

#[test]
fn error_headers_drop_content_type() {
    assert!(CORS_ALLOW_HEADERS_SUCCESS.contains("content-type"));
    assert!(!CORS_ALLOW_HEADERS_ERROR.contains("content-type"));
}

#[test]
fn error_envelope_parses_back() {
    let payload = r#"{"errors":[{"status":"401","title":"Cannot request other user's data."}]}"#;
    let envelope: ErrorEnvelope = serde_json::from_str(payload).expect("parse");
    assert_eq!(envelope.errors[0].status, "401");
}

#[test]
fn metrics_snapshot_is_camel_case() {
    let dto = MetricsSnapshotDto {
        requests: 3,
        rejected_bad_request: 1,
        rejected_unauthorized: 1,
        dispatched_user_stats: 0,
        dispatched_counts: 1,
        dispatched_recorded_taxa_list: 0,
        engine_failures: 0,
        engine_latency_ms_total: 12,
        engine_latency_ms_count: 1,
    };
    let value = serde_json::to_value(dto).expect("serialize");
    assert!(value.get("rejectedBadRequest").is_some());
    assert!(value.get("rejected_bad_request").is_none());
    assert!(matches!(value.get("engineLatencyMsTotal"), Some(Value::Number(_))));
}
