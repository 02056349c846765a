//! 报表分发：解析报表专属选项，调用引擎对应操作。

use crate::error::{ReportError, TITLE_UNKNOWN_REPORT};
use crate::params;
use domain::{CallerIdentity, CategorySet, FilterSet, QueryParams, ReportName};
use reports_engine::{EngineError, MetricsEngine};
use serde_json::Value;
use std::time::Duration;

/// 报表专属选项。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOptions {
    UserStats,
    Counts(CategorySet),
    RecordedTaxaList { species_only: bool },
}

/// 已通过全部校验的报表请求，只能由本 crate 构造。
#[derive(Debug, Clone)]
pub struct ReportRequest {
    report: ReportName,
    caller: CallerIdentity,
    filters: FilterSet,
    options: ReportOptions,
}

impl ReportRequest {
    pub(crate) fn new(
        report: ReportName,
        caller: CallerIdentity,
        filters: FilterSet,
        options: ReportOptions,
    ) -> Self {
        Self {
            report,
            caller,
            filters,
            options,
        }
    }

    pub fn report(&self) -> ReportName {
        self.report
    }

    pub fn caller(&self) -> &CallerIdentity {
        &self.caller
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }
}

/// 按报表名解析选项。
pub fn resolve_options(
    report: ReportName,
    query: &QueryParams,
) -> Result<ReportOptions, ReportError> {
    match report {
        ReportName::UserStats => Ok(ReportOptions::UserStats),
        ReportName::Counts => resolve_categories(query).map(ReportOptions::Counts),
        ReportName::RecordedTaxaList => Ok(ReportOptions::RecordedTaxaList {
            species_only: resolve_species_only(query),
        }),
        _ => Err(ReportError::BadRequest(TITLE_UNKNOWN_REPORT.to_string())),
    }
}

/// 未提供 categories 时默认只统计 records；提供了则逐个校验（空值同样非法）。
pub fn resolve_categories(query: &QueryParams) -> Result<CategorySet, ReportError> {
    match query.raw(params::CATEGORIES) {
        None => Ok(CategorySet::records_only()),
        Some(value) => {
            CategorySet::parse_list(value).map_err(|token| ReportError::invalid_category(&token))
        }
    }
}

/// exclude_higher_taxa 已废弃，与 species_only 任一为 `t` 即只返回物种。
pub fn resolve_species_only(query: &QueryParams) -> bool {
    query.is_flag_set(params::EXCLUDE_HIGHER_TAXA, params::FLAG_TRUE)
        || query.is_flag_set(params::SPECIES_ONLY, params::FLAG_TRUE)
}

/// 调用引擎的唯一一次计算；不重试、不缓存。
pub async fn dispatch(
    engine: &dyn MetricsEngine,
    request: &ReportRequest,
    timeout: Option<Duration>,
) -> Result<Value, ReportError> {
    let call = async {
        match &request.options {
            ReportOptions::UserStats => engine.compute_user_metrics(&request.filters).await,
            ReportOptions::Counts(categories) => {
                engine.compute_counts(&request.filters, categories).await
            }
            ReportOptions::RecordedTaxaList { species_only } => {
                engine
                    .compute_recorded_taxa_list(&request.filters, *species_only)
                    .await
            }
        }
    };
    let output = match timeout {
        Some(limit) => match tokio::time::timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => Err(EngineError::Timeout(limit.as_millis() as u64)),
        },
        None => call.await,
    };
    output.map_err(ReportError::from)
}
