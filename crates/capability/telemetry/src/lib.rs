//! 追踪、请求 ID 生成与报表请求计数。

use domain::ReportName;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 报表指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
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

/// 报表指标（进程级、无锁）。
pub struct TelemetryMetrics {
    requests: AtomicU64,
    rejected_bad_request: AtomicU64,
    rejected_unauthorized: AtomicU64,
    dispatched_user_stats: AtomicU64,
    dispatched_counts: AtomicU64,
    dispatched_recorded_taxa_list: AtomicU64,
    engine_failures: AtomicU64,
    engine_latency_ms_total: AtomicU64,
    engine_latency_ms_count: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            requests: AtomicU64::new(0),
            rejected_bad_request: AtomicU64::new(0),
            rejected_unauthorized: AtomicU64::new(0),
            dispatched_user_stats: AtomicU64::new(0),
            dispatched_counts: AtomicU64::new(0),
            dispatched_recorded_taxa_list: AtomicU64::new(0),
            engine_failures: AtomicU64::new(0),
            engine_latency_ms_total: AtomicU64::new(0),
            engine_latency_ms_count: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            rejected_bad_request: self.rejected_bad_request.load(Ordering::Relaxed),
            rejected_unauthorized: self.rejected_unauthorized.load(Ordering::Relaxed),
            dispatched_user_stats: self.dispatched_user_stats.load(Ordering::Relaxed),
            dispatched_counts: self.dispatched_counts.load(Ordering::Relaxed),
            dispatched_recorded_taxa_list: self
                .dispatched_recorded_taxa_list
                .load(Ordering::Relaxed),
            engine_failures: self.engine_failures.load(Ordering::Relaxed),
            engine_latency_ms_total: self.engine_latency_ms_total.load(Ordering::Relaxed),
            engine_latency_ms_count: self.engine_latency_ms_count.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录报表请求次数（含失败）。
pub fn record_request() {
    metrics().requests.fetch_add(1, Ordering::Relaxed);
}

/// 记录 400 拒绝次数。
pub fn record_rejected_bad_request() {
    metrics().rejected_bad_request.fetch_add(1, Ordering::Relaxed);
}

/// 记录 401 拒绝次数。
pub fn record_rejected_unauthorized() {
    metrics()
        .rejected_unauthorized
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录分发到引擎的报表。
pub fn record_dispatched(report: ReportName) {
    let metrics = metrics();
    let counter = match report {
        ReportName::UserStats => &metrics.dispatched_user_stats,
        ReportName::Counts => &metrics.dispatched_counts,
        ReportName::RecordedTaxaList => &metrics.dispatched_recorded_taxa_list,
        // 新增报表在此补充独立计数前不计入
        _ => return,
    };
    counter.fetch_add(1, Ordering::Relaxed);
}

/// 记录引擎调用失败次数。
pub fn record_engine_failure() {
    metrics().engine_failures.fetch_add(1, Ordering::Relaxed);
}

/// 记录引擎调用耗时（毫秒）。
pub fn record_engine_latency_ms(latency_ms: u64) {
    let metrics = metrics();
    metrics
        .engine_latency_ms_total
        .fetch_add(latency_ms, Ordering::Relaxed);
    metrics
        .engine_latency_ms_count
        .fetch_add(1, Ordering::Relaxed);
}
