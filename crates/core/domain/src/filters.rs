//! 后端过滤条件。
//!
//! 键为搜索后端文档字段的点分路径，值为标量字符串。

use serde::ser::{Serialize, SerializeMap, Serializer};

/// 可用于过滤的后端文档字段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    SurveyId,
    GroupId,
    TaxonGroupId,
    EventYear,
    CreatedById,
}

impl FilterField {
    /// 后端文档中的点分字段路径。
    pub fn path(&self) -> &'static str {
        match self {
            Self::SurveyId => "metadata.survey.id",
            Self::GroupId => "metadata.group.id",
            Self::TaxonGroupId => "taxon.group_id",
            Self::EventYear => "event.year",
            Self::CreatedById => "metadata.created_by_id",
        }
    }
}

/// 有序过滤条件集合，键唯一。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: Vec<(FilterField, String)>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入条件；同名键覆盖原值并保留原位置。
    pub fn insert(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, field: FilterField) -> bool {
        self.get(field).is_some()
    }

    /// 按插入顺序遍历（字段路径, 值）。
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(field, value)| (field.path(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FilterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, value) in self.iter() {
            map.serialize_entry(path, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_in_place() {
        let mut filters = FilterSet::new();
        filters.insert(FilterField::SurveyId, "1");
        filters.insert(FilterField::EventYear, "2024");
        filters.insert(FilterField::SurveyId, "2");
        let entries: Vec<_> = filters.iter().collect();
        assert_eq!(
            entries,
            vec![("metadata.survey.id", "2"), ("event.year", "2024")]
        );
    }

    #[test]
    fn serializes_as_object_in_insertion_order() {
        let mut filters = FilterSet::new();
        filters.insert(FilterField::TaxonGroupId, "12");
        filters.insert(FilterField::SurveyId, "5");
        let json = serde_json::to_string(&filters).expect("serialize");
        assert_eq!(json, r#"{"taxon.group_id":"12","metadata.survey.id":"5"}"#);
    }
}
