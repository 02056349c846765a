use crate::error::{ReportError, TITLE_INCORRECT_REPORT};
use domain::ReportName;

/// 校验 URL 中的报表名，必须先于其他参数执行。
pub fn select_report(segment: &str) -> Result<ReportName, ReportError> {
    ReportName::parse(segment)
        .ok_or_else(|| ReportError::BadRequest(TITLE_INCORRECT_REPORT.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_reports_pass() {
        assert_eq!(select_report("counts").expect("counts"), ReportName::Counts);
        assert_eq!(
            select_report("recorded-taxa-list").expect("taxa"),
            ReportName::RecordedTaxaList
        );
    }

    #[test]
    fn unknown_or_empty_report_is_bad_request() {
        for segment in ["", "stats", "counts ", "COUNTS"] {
            let err = select_report(segment).unwrap_err();
            assert_eq!(err.status_code(), 400);
            assert_eq!(err.to_string(), TITLE_INCORRECT_REPORT);
        }
    }
}
