//! 报表名与统计类别。

use serde::Serialize;
use std::fmt;

/// 支持的高级报表。
///
/// 标记为 `non_exhaustive`：下游匹配必须保留兜底分支，
/// 新增报表时未适配的分发逻辑会落入“未知报表”错误而不是静默执行。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ReportName {
    UserStats,
    Counts,
    RecordedTaxaList,
}

impl ReportName {
    pub const ALL: [ReportName; 3] = [
        ReportName::UserStats,
        ReportName::Counts,
        ReportName::RecordedTaxaList,
    ];

    /// 从 URL 路径段解析报表名，未知或空值返回 None。
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user-stats" => Some(Self::UserStats),
            "counts" => Some(Self::Counts),
            "recorded-taxa-list" => Some(Self::RecordedTaxaList),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserStats => "user-stats",
            Self::Counts => "counts",
            Self::RecordedTaxaList => "recorded-taxa-list",
        }
    }

    /// 报表是否总是只针对调用方本人计算。
    pub fn is_caller_scoped(&self) -> bool {
        matches!(self, Self::UserStats)
    }
}

impl fmt::Display for ReportName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// counts 报表的统计类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Records,
    Species,
    Photos,
    Recorders,
}

impl Category {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "records" => Some(Self::Records),
            "species" => Some(Self::Species),
            "photos" => Some(Self::Photos),
            "recorders" => Some(Self::Recorders),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Records => "records",
            Self::Species => "species",
            Self::Photos => "photos",
            Self::Recorders => "recorders",
        }
    }
}

/// 非空、去重且保持首次出现顺序的类别集合。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategorySet(Vec<Category>);

impl CategorySet {
    /// 未指定类别时的默认集合：仅 records。
    pub fn records_only() -> Self {
        Self(vec![Category::Records])
    }

    /// 解析逗号分隔的类别列表；失败时返回第一个非法 token。
    pub fn parse_list(value: &str) -> Result<Self, String> {
        let mut categories = Vec::new();
        for token in value.split(',') {
            let category = Category::parse(token).ok_or_else(|| token.to_string())?;
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        // split 至少产出一个 token，且空 token 会被拒绝，因此这里必然非空
        Ok(Self(categories))
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
