use crate::params;
use domain::{FilterField, FilterSet, QueryParams, ReportName};

/// 由查询参数推导后端过滤条件；仅在校验通过后调用，不会失败。
///
/// survey_id 优先于 group_id，两者至多写入一个。
/// year 与 user_id 对 user-stats 不生效，taxon_group_id 对所有报表生效。
pub fn build_filters(report: ReportName, query: &QueryParams) -> FilterSet {
    let mut filters = FilterSet::new();
    if let Some(survey_id) = query.non_empty(params::SURVEY_ID) {
        filters.insert(FilterField::SurveyId, survey_id);
    } else if let Some(group_id) = query.non_empty(params::GROUP_ID) {
        filters.insert(FilterField::GroupId, group_id);
    }
    if let Some(taxon_group_id) = query.non_empty(params::TAXON_GROUP_ID) {
        filters.insert(FilterField::TaxonGroupId, taxon_group_id);
    }
    if !report.is_caller_scoped() {
        if let Some(year) = query.non_empty(params::YEAR) {
            filters.insert(FilterField::EventYear, year);
        }
        if let Some(user_id) = query.non_empty(params::USER_ID) {
            filters.insert(FilterField::CreatedById, user_id);
        }
    }
    filters
}
