//! 报表领域模型：报表名、统计类别、过滤条件与调用方身份。

pub mod filters;
pub mod query;
pub mod report;

pub use filters::{FilterField, FilterSet};
pub use query::QueryParams;
pub use report::{Category, CategorySet, ReportName};

/// 调用方身份：已认证用户在后端（warehouse）中的用户 ID。
///
/// 只能由认证层从已校验的 token 中构造，不得来自查询参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: String,
}

impl CallerIdentity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// 判断给定值是否指向调用方本人。
    pub fn is_self(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
