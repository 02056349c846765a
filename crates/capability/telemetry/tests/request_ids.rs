use domain::ReportName;
use reports_telemetry::{metrics, new_request_ids, record_dispatched, record_engine_latency_ms};

#[test]
fn request_ids_non_empty() {
    let ids = new_request_ids();
    assert!(!ids.request_id.is_empty());
    assert!(!ids.trace_id.is_empty());
    assert_ne!(ids.request_id, ids.trace_id);
}

#[test]
fn counters_are_monotonic() {
    let before = metrics().snapshot();
    record_dispatched(ReportName::Counts);
    record_engine_latency_ms(7);
    let after = metrics().snapshot();
    assert!(after.dispatched_counts > before.dispatched_counts);
    assert!(after.engine_latency_ms_total >= before.engine_latency_ms_total + 7);
    assert!(after.engine_latency_ms_count > before.engine_latency_ms_count);
}
