//! 内存引擎实现
//!
//! 仅用于本地演示和测试，不替代搜索后端。
//!
//! 文档为 JSON 对象，过滤字段按点分路径逐级查找；
//! 数字与字符串按字符串形式比较（查询参数总是字符串）。

use crate::{EngineError, MetricsEngine, MetricsEngineFactory};
use async_trait::async_trait;
use domain::{CallerIdentity, Category, CategorySet, FilterField, FilterSet};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

const SPECIES_TAXON_ID: &str = "taxon.species_taxon_id";
const ACCEPTED_TAXON_ID: &str = "taxon.accepted_taxon_id";
const ACCEPTED_NAME: &str = "taxon.accepted_name";
const RANK_SORT_ORDER: &str = "taxon.taxon_rank_sort_order";
const MEDIA: &str = "occurrence.media";
/// 物种等级的排序值，大于等于该值视为物种或更低等级。
const SPECIES_RANK_SORT_ORDER: i64 = 300;

/// 只读的出现记录文档集合。
#[derive(Debug, Default)]
pub struct OccurrenceStore {
    documents: Vec<Value>,
}

impl OccurrenceStore {
    pub fn new(documents: Vec<Value>) -> Self {
        Self { documents }
    }

    /// 从 JSON 数组文件加载文档。
    pub fn from_path(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| EngineError::Fixture(format!("{}: {err}", path.display())))?;
        let documents: Vec<Value> = serde_json::from_str(&raw)
            .map_err(|err| EngineError::Fixture(format!("{}: {err}", path.display())))?;
        if let Some(index) = documents.iter().position(|doc| !doc.is_object()) {
            return Err(EngineError::Fixture(format!(
                "{}: document {index} is not an object",
                path.display()
            )));
        }
        tracing::info!(documents = documents.len(), path = %path.display(), "fixture loaded");
        Ok(Self { documents })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn matching<'a>(&'a self, filters: &'a FilterSet) -> impl Iterator<Item = &'a Value> + 'a {
        self.documents
            .iter()
            .filter(move |doc| matches_filters(doc, filters))
    }
}

/// 内存引擎工厂：所有请求共享同一份文档。
#[derive(Clone)]
pub struct InMemoryEngineFactory {
    store: Arc<OccurrenceStore>,
}

impl InMemoryEngineFactory {
    pub fn new(store: Arc<OccurrenceStore>) -> Self {
        Self { store }
    }
}

impl MetricsEngineFactory for InMemoryEngineFactory {
    fn for_caller(&self, caller: &CallerIdentity) -> Arc<dyn MetricsEngine> {
        Arc::new(InMemoryMetricsEngine::new(caller.clone(), self.store.clone()))
    }
}

/// 绑定调用方身份的内存引擎。
pub struct InMemoryMetricsEngine {
    caller: CallerIdentity,
    store: Arc<OccurrenceStore>,
}

#[derive(Debug, Serialize)]
struct UserMetrics {
    records: u64,
    species: u64,
    /// 调用方按记录数在记录人中的名次（并列同名次），无记录时为 null。
    rank: Option<u64>,
    recorders: u64,
}

#[derive(Debug, Serialize)]
struct TaxonCount {
    taxon_id: String,
    taxon: String,
    count: u64,
}

impl InMemoryMetricsEngine {
    pub fn new(caller: CallerIdentity, store: Arc<OccurrenceStore>) -> Self {
        Self { caller, store }
    }
}

#[async_trait]
impl MetricsEngine for InMemoryMetricsEngine {
    async fn compute_user_metrics(&self, filters: &FilterSet) -> Result<Value, EngineError> {
        let mut per_recorder: HashMap<String, u64> = HashMap::new();
        let mut species = HashSet::new();
        for doc in self.store.matching(filters) {
            let Some(recorder) = scalar_at(doc, FilterField::CreatedById.path()) else {
                continue;
            };
            if recorder == self.caller.user_id {
                if let Some(taxon) = scalar_at(doc, SPECIES_TAXON_ID) {
                    species.insert(taxon);
                }
            }
            *per_recorder.entry(recorder).or_default() += 1;
        }
        let records = per_recorder.get(&self.caller.user_id).copied().unwrap_or(0);
        let rank = (records > 0).then(|| {
            1 + per_recorder
                .values()
                .filter(|count| **count > records)
                .count() as u64
        });
        to_value(UserMetrics {
            records,
            species: species.len() as u64,
            rank,
            recorders: per_recorder.len() as u64,
        })
    }

    async fn compute_counts(
        &self,
        filters: &FilterSet,
        categories: &CategorySet,
    ) -> Result<Value, EngineError> {
        let mut records = 0u64;
        let mut photos = 0u64;
        let mut species = HashSet::new();
        let mut recorders = HashSet::new();
        for doc in self.store.matching(filters) {
            records += 1;
            if let Some(media) = value_at(doc, MEDIA).and_then(Value::as_array) {
                photos += media.len() as u64;
            }
            if let Some(taxon) = scalar_at(doc, SPECIES_TAXON_ID) {
                species.insert(taxon);
            }
            if let Some(recorder) = scalar_at(doc, FilterField::CreatedById.path()) {
                recorders.insert(recorder);
            }
        }
        let mut output = Map::new();
        for category in categories.iter() {
            let count = match category {
                Category::Records => records,
                Category::Species => species.len() as u64,
                Category::Photos => photos,
                Category::Recorders => recorders.len() as u64,
            };
            output.insert(category.as_str().to_string(), Value::from(count));
        }
        Ok(Value::Object(output))
    }

    async fn compute_recorded_taxa_list(
        &self,
        filters: &FilterSet,
        species_only: bool,
    ) -> Result<Value, EngineError> {
        let mut taxa: HashMap<String, TaxonCount> = HashMap::new();
        for doc in self.store.matching(filters) {
            if species_only && !is_species_or_lower(doc) {
                continue;
            }
            let Some(taxon_id) = scalar_at(doc, ACCEPTED_TAXON_ID) else {
                continue;
            };
            let entry = taxa.entry(taxon_id.clone()).or_insert_with(|| TaxonCount {
                taxon: scalar_at(doc, ACCEPTED_NAME).unwrap_or_default(),
                taxon_id,
                count: 0,
            });
            entry.count += 1;
        }
        let mut list: Vec<TaxonCount> = taxa.into_values().collect();
        list.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.taxon.cmp(&b.taxon))
                .then_with(|| a.taxon_id.cmp(&b.taxon_id))
        });
        to_value(list)
    }
}

fn to_value<T: Serialize>(value: T) -> Result<Value, EngineError> {
    serde_json::to_value(value).map_err(|err| EngineError::Backend(err.to_string()))
}

fn matches_filters(doc: &Value, filters: &FilterSet) -> bool {
    filters
        .iter()
        .all(|(path, expected)| scalar_at(doc, path).as_deref() == Some(expected))
}

fn is_species_or_lower(doc: &Value) -> bool {
    value_at(doc, RANK_SORT_ORDER)
        .and_then(Value::as_i64)
        .is_some_and(|order| order >= SPECIES_RANK_SORT_ORDER)
}

/// 按点分路径逐级查找。
fn value_at<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(doc, |current, segment| current.as_object()?.get(segment))
}

/// 标量值的字符串形式；null、数组与对象返回 None。
fn scalar_at(doc: &Value, path: &str) -> Option<String> {
    match value_at(doc, path)? {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        Value::Bool(value) => Some(value.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn value_at_walks_nested_objects() {
        let doc = json!({ "metadata": { "survey": { "id": 5 } } });
        assert_eq!(scalar_at(&doc, "metadata.survey.id").as_deref(), Some("5"));
        assert!(value_at(&doc, "metadata.group.id").is_none());
        assert!(value_at(&doc, "metadata.survey.id.extra").is_none());
    }

    #[test]
    fn filters_compare_by_string_form() {
        let doc = json!({ "metadata": { "survey": { "id": 5 } }, "event": { "year": "2024" } });
        let mut filters = FilterSet::new();
        filters.insert(FilterField::SurveyId, "5");
        filters.insert(FilterField::EventYear, "2024");
        assert!(matches_filters(&doc, &filters));
        filters.insert(FilterField::EventYear, "2023");
        assert!(!matches_filters(&doc, &filters));
    }

    #[test]
    fn rank_order_threshold() {
        assert!(is_species_or_lower(&json!({ "taxon": { "taxon_rank_sort_order": 300 } })));
        assert!(!is_species_or_lower(&json!({ "taxon": { "taxon_rank_sort_order": 180 } })));
        assert!(!is_species_or_lower(&json!({ "taxon": {} })));
    }
}
