//! 过滤参数校验
//!
//! 规则按顺序执行，第一个失败的规则决定错误：
//! 1. survey_id 与 group_id 至少一个非空
//! 2. 非 user-stats 报表的 user_id 只能是调用方本人

use crate::error::{ReportError, TITLE_OTHER_USER, TITLE_SCOPE_MISSING};
use crate::params;
use domain::{CallerIdentity, QueryParams, ReportName};

pub fn validate_filters(
    report: ReportName,
    caller: &CallerIdentity,
    query: &QueryParams,
) -> Result<(), ReportError> {
    if query.non_empty(params::SURVEY_ID).is_none() && query.non_empty(params::GROUP_ID).is_none() {
        return Err(ReportError::BadRequest(TITLE_SCOPE_MISSING.to_string()));
    }
    // user-stats 总是针对调用方计算，user_id 与鉴权无关
    if report.is_caller_scoped() {
        return Ok(());
    }
    match query.non_empty(params::USER_ID) {
        Some(user_id) if !caller.is_self(user_id) => {
            Err(ReportError::Unauthorized(TITLE_OTHER_USER.to_string()))
        }
        _ => Ok(()),
    }
}
