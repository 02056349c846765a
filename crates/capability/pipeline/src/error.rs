//! 报表请求错误。
//!
//! 校验失败均为终止性错误：第一个失败的规则直接返回，不做部分处理。

use reports_engine::EngineError;

pub const TITLE_INCORRECT_REPORT: &str = "Missing or incorrect report url.";
pub const TITLE_SCOPE_MISSING: &str =
    "Parameter for survey_id or group_id missing from query string.";
pub const TITLE_OTHER_USER: &str = "Cannot request other user's data.";
pub const TITLE_UNKNOWN_REPORT: &str = "Unknown advanced report requested.";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// 400：参数形状错误。
    #[error("{0}")]
    BadRequest(String),
    /// 401：请求越权。
    #[error("{0}")]
    Unauthorized(String),
    /// 引擎失败，细节只进日志。
    #[error("engine failure: {0}")]
    Engine(#[from] EngineError),
}

impl ReportError {
    pub fn invalid_category(token: &str) -> Self {
        Self::BadRequest(format!(
            "Parameter for categories contains invalid value {token}."
        ))
    }

    /// 对应的 HTTP 状态码。
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::Engine(_) => 500,
        }
    }

    pub fn is_engine_failure(&self) -> bool {
        matches!(self, Self::Engine(_))
    }
}
