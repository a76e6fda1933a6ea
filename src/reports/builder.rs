//! Report model builder
//!
//! Glue between the literal request parameters and the aggregator.

use super::aggregator::aggregate;
use super::category_report::{CategoryReport, ReportPeriod};
use crate::error::ReportResult;
use crate::models::ExpenseRecord;

/// Build a category report for one user's expenses
///
/// `start_date` and `end_date` must be `YYYY-MM-DD`; they are copied into
/// the report unchanged.
pub fn build_category_report(
    user_expenses: &[ExpenseRecord],
    start_date: &str,
    end_date: &str,
) -> ReportResult<CategoryReport> {
    let period = ReportPeriod::parse(start_date, end_date)?;
    aggregate(user_expenses, &period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryLabel, Money, UserId};
    use chrono::NaiveDate;

    #[test]
    fn test_build_echoes_request_dates() {
        let owner = UserId::new();
        let records = vec![ExpenseRecord::new(
            owner,
            "Cinema",
            Money::from_cents(1800),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            CategoryLabel::Entertainment,
        )];

        let report = build_category_report(&records, "2024-03-01", "2024-03-31").unwrap();

        assert_eq!(report.start_date, "2024-03-01");
        assert_eq!(report.end_date, "2024-03-31");
        assert_eq!(report.categories[0].category, CategoryLabel::Entertainment);
        assert_eq!(report.total_amount, Money::from_cents(1800));
    }

    #[test]
    fn test_build_rejects_malformed_dates() {
        let err = build_category_report(&[], "03/01/2024", "2024-03-31").unwrap_err();
        assert!(err.is_validation());
    }
}
