//! # 报表指标引擎接口
//!
//! 报表的实际聚合由外部搜索后端完成，这里只定义窄接口：
//!
//! - [`MetricsEngine`]：三个报表计算操作
//! - [`MetricsEngineFactory`]：按调用方身份为每个请求构造引擎
//! - [`EngineError`]：引擎失败（对调用方不透明，统一按 5xx 处理）
//!
//! [`in_memory`] 提供基于内存文档的实现，仅用于本地运行和测试。

pub mod in_memory;

use async_trait::async_trait;
use domain::{CallerIdentity, CategorySet, FilterSet};
use serde_json::Value;
use std::sync::Arc;

pub use in_memory::{InMemoryEngineFactory, InMemoryMetricsEngine, OccurrenceStore};

/// 引擎错误。
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("backend error: {0}")]
    Backend(String),
    #[error("engine call timed out after {0} ms")]
    Timeout(u64),
    #[error("fixture error: {0}")]
    Fixture(String),
}

/// 报表计算接口，每个方法对应一种报表。
#[async_trait]
pub trait MetricsEngine: Send + Sync {
    /// 调用方本人的统计。
    async fn compute_user_metrics(&self, filters: &FilterSet) -> Result<Value, EngineError>;

    /// 按类别计数。
    async fn compute_counts(
        &self,
        filters: &FilterSet,
        categories: &CategorySet,
    ) -> Result<Value, EngineError>;

    /// 已记录物种列表。
    async fn compute_recorded_taxa_list(
        &self,
        filters: &FilterSet,
        species_only: bool,
    ) -> Result<Value, EngineError>;
}

/// 按请求构造引擎。
pub trait MetricsEngineFactory: Send + Sync {
    fn for_caller(&self, caller: &CallerIdentity) -> Arc<dyn MetricsEngine>;
}
