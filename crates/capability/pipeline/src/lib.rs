//! # 高级报表请求流水线
//!
//! 将一次报表请求依次经过：
//!
//! 1. [`selector`]：校验报表名
//! 2. [`validation`]：范围与越权校验
//! 3. [`filters`]：推导后端过滤条件
//! 4. [`dispatch`]：解析报表选项并调用引擎
//!
//! 任一步失败立即返回，不会进入后续步骤。

pub mod dispatch;
pub mod error;
pub mod filters;
pub mod selector;
pub mod validation;

use domain::{CallerIdentity, QueryParams};
use reports_engine::MetricsEngineFactory;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub use dispatch::{ReportOptions, ReportRequest};
pub use error::ReportError;
pub use filters::build_filters;
pub use selector::select_report;
pub use validation::validate_filters;

/// 查询参数名。
pub mod params {
    pub const SURVEY_ID: &str = "survey_id";
    pub const GROUP_ID: &str = "group_id";
    pub const TAXON_GROUP_ID: &str = "taxon_group_id";
    pub const YEAR: &str = "year";
    pub const USER_ID: &str = "user_id";
    pub const CATEGORIES: &str = "categories";
    /// 已废弃，使用 species_only。
    pub const EXCLUDE_HIGHER_TAXA: &str = "exclude_higher_taxa";
    pub const SPECIES_ONLY: &str = "species_only";
    pub const FLAG_TRUE: &str = "t";
}

/// 报表流水线：持有引擎工厂与调用超时，本身无请求间可变状态。
#[derive(Clone)]
pub struct ReportPipeline {
    engines: Arc<dyn MetricsEngineFactory>,
    engine_timeout: Option<Duration>,
}

impl ReportPipeline {
    pub fn new(engines: Arc<dyn MetricsEngineFactory>, engine_timeout: Option<Duration>) -> Self {
        Self {
            engines,
            engine_timeout,
        }
    }

    /// 校验并准备请求，不触碰引擎。
    pub fn prepare(
        &self,
        caller: &CallerIdentity,
        report: &str,
        query: &QueryParams,
    ) -> Result<ReportRequest, ReportError> {
        let report = select_report(report)?;
        validate_filters(report, caller, query)?;
        let filters = build_filters(report, query);
        let options = dispatch::resolve_options(report, query)?;
        Ok(ReportRequest::new(report, caller.clone(), filters, options))
    }

    /// 执行完整流水线并记录结果。
    pub async fn run(
        &self,
        caller: &CallerIdentity,
        report: &str,
        query: &QueryParams,
    ) -> Result<Value, ReportError> {
        reports_telemetry::record_request();
        let request = match self.prepare(caller, report, query) {
            Ok(request) => request,
            Err(err) => {
                if matches!(err, ReportError::Unauthorized(_)) {
                    reports_telemetry::record_rejected_unauthorized();
                } else {
                    reports_telemetry::record_rejected_bad_request();
                }
                tracing::info!(report, status = err.status_code(), reason = %err, "report request rejected");
                return Err(err);
            }
        };

        reports_telemetry::record_dispatched(request.report());
        tracing::debug!(
            report = %request.report(),
            filters = request.filters().len(),
            "dispatching report"
        );
        let engine = self.engines.for_caller(request.caller());
        let started = Instant::now();
        let result = dispatch::dispatch(engine.as_ref(), &request, self.engine_timeout).await;
        reports_telemetry::record_engine_latency_ms(started.elapsed().as_millis() as u64);
        if let Err(err) = &result {
            reports_telemetry::record_engine_failure();
            tracing::error!(report = %request.report(), error = %err, "report engine failed");
        }
        result
    }
}
