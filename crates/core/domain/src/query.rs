//! 原始查询参数。

use std::collections::HashMap;

/// 请求查询参数的只读视图，显式传递给各校验/构建步骤。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// 原始值（包含空字符串）。
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// 非空原值；仅缺失或空串视为未提供，空白字符原样保留。
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.raw(key).filter(|value| !value.is_empty())
    }

    /// 参数是否严格等于字面量 token（不做 trim，区分大小写）。
    pub fn is_flag_set(&self, key: &str, token: &str) -> bool {
        self.raw(key) == Some(token)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
