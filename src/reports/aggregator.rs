//! Category aggregation
//!
//! Scans expense records over a period and produces one summary per
//! category label. Ordering is by total, highest first; equal totals keep
//! label declaration order.

use log::debug;

use super::category_report::{CategoryReport, CategorySummary, ReportPeriod};
use crate::error::{ReportError, ReportResult};
use crate::models::{CategoryLabel, ExpenseRecord, Money};

/// Aggregate `records` that fall inside `period`
///
/// The period is always re-checked here even when the caller already
/// filtered by date. A record with a negative amount fails the whole
/// computation.
pub fn aggregate(records: &[ExpenseRecord], period: &ReportPeriod) -> ReportResult<CategoryReport> {
    // Indexed by CategoryLabel::ordinal
    let mut summaries: Vec<CategorySummary> = CategoryLabel::ALL
        .iter()
        .map(|&label| CategorySummary::empty(label))
        .collect();

    let mut included = 0usize;
    for record in records {
        if record.amount.is_negative() {
            return Err(ReportError::ContractViolation(format!(
                "expense {} has negative amount {}",
                record.id.short(),
                record.amount.format_plain()
            )));
        }

        if !period.contains(record.occurred_on) {
            continue;
        }

        let summary = &mut summaries[record.category.ordinal()];
        summary.total += record.amount;
        summary.count += 1;
        included += 1;
    }

    // sort_by is stable, so ties stay in declaration order
    summaries.sort_by(|a, b| b.total.cmp(&a.total));

    let total_amount: Money = summaries.iter().map(|s| s.total).sum();

    debug!(
        "Aggregated {} of {} expenses for {}..{}: total {}",
        included,
        records.len(),
        period.start_date(),
        period.end_date(),
        total_amount.format_plain()
    );

    Ok(CategoryReport {
        start_date: period.start_date().to_string(),
        end_date: period.end_date().to_string(),
        total_amount,
        categories: summaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;
    use chrono::NaiveDate;

    fn expense(category: CategoryLabel, amount: &str, date: &str) -> ExpenseRecord {
        ExpenseRecord::new(
            UserId::new(),
            "test",
            Money::parse(amount).unwrap(),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category,
        )
    }

    fn january() -> ReportPeriod {
        ReportPeriod::parse("2024-01-01", "2024-01-31").unwrap()
    }

    #[test]
    fn test_food_and_transport_scenario() {
        let records = vec![
            expense(CategoryLabel::Food, "100", "2024-01-15"),
            expense(CategoryLabel::Food, "50", "2024-01-16"),
            expense(CategoryLabel::Transportation, "75", "2024-01-17"),
        ];

        let report = aggregate(&records, &january()).unwrap();

        assert_eq!(report.total_amount, Money::parse("225").unwrap());
        assert_eq!(report.categories.len(), CategoryLabel::ALL.len());

        assert_eq!(report.categories[0].category, CategoryLabel::Food);
        assert_eq!(report.categories[0].total, Money::parse("150").unwrap());
        assert_eq!(report.categories[0].count, 2);

        assert_eq!(report.categories[1].category, CategoryLabel::Transportation);
        assert_eq!(report.categories[1].total, Money::parse("75").unwrap());
        assert_eq!(report.categories[1].count, 1);

        // Remaining zero rows keep declaration order
        let rest: Vec<_> = report.categories[2..].iter().map(|s| s.category).collect();
        let expected: Vec<_> = CategoryLabel::ALL
            .iter()
            .copied()
            .filter(|c| *c != CategoryLabel::Food && *c != CategoryLabel::Transportation)
            .collect();
        assert_eq!(rest, expected);
        assert!(report.categories[2..]
            .iter()
            .all(|s| s.total.is_zero() && s.count == 0));
    }

    #[test]
    fn test_empty_input_has_every_label() {
        let report = aggregate(&[], &january()).unwrap();

        assert!(report.total_amount.is_zero());
        let labels: Vec<_> = report.categories.iter().map(|s| s.category).collect();
        assert_eq!(labels, CategoryLabel::ALL.to_vec());
        assert!(report
            .categories
            .iter()
            .all(|s| s.total.is_zero() && s.count == 0));
    }

    #[test]
    fn test_each_label_appears_exactly_once() {
        let records = vec![
            expense(CategoryLabel::Other, "1", "2024-01-02"),
            expense(CategoryLabel::Other, "2", "2024-01-03"),
            expense(CategoryLabel::Shopping, "3", "2024-01-04"),
        ];
        let report = aggregate(&records, &january()).unwrap();

        for label in CategoryLabel::ALL {
            let hits = report.categories.iter().filter(|s| s.category == label).count();
            assert_eq!(hits, 1, "{} should appear once", label);
        }
    }

    #[test]
    fn test_range_is_inclusive_at_both_ends() {
        let records = vec![
            expense(CategoryLabel::Food, "10", "2023-12-31"),
            expense(CategoryLabel::Food, "20", "2024-01-01"),
            expense(CategoryLabel::Food, "30", "2024-01-31"),
            expense(CategoryLabel::Food, "40", "2024-02-01"),
        ];

        let report = aggregate(&records, &january()).unwrap();
        let food = report.summary_for(CategoryLabel::Food).unwrap();

        assert_eq!(food.count, 2);
        assert_eq!(food.total, Money::parse("50").unwrap());
        assert_eq!(report.total_amount, Money::parse("50").unwrap());
    }

    #[test]
    fn test_ties_keep_declaration_order() {
        let records = vec![
            expense(CategoryLabel::Education, "20", "2024-01-10"),
            expense(CategoryLabel::Entertainment, "20", "2024-01-10"),
            expense(CategoryLabel::Utilities, "20", "2024-01-10"),
            expense(CategoryLabel::Healthcare, "5", "2024-01-10"),
        ];

        let report = aggregate(&records, &january()).unwrap();
        let order: Vec<_> = report.categories.iter().map(|s| s.category).collect();

        assert_eq!(
            &order[..4],
            &[
                CategoryLabel::Entertainment,
                CategoryLabel::Utilities,
                CategoryLabel::Education,
                CategoryLabel::Healthcare,
            ]
        );
    }

    #[test]
    fn test_total_is_exact_decimal_sum() {
        let records: Vec<_> = (0..10)
            .map(|_| expense(CategoryLabel::Food, "0.1", "2024-01-05"))
            .chain((0..10).map(|_| expense(CategoryLabel::Shopping, "0.2", "2024-01-06")))
            .collect();

        let report = aggregate(&records, &january()).unwrap();

        assert_eq!(report.total_amount, Money::parse("3").unwrap());
        let per_category: Money = report.categories.iter().map(|s| s.total).sum();
        assert_eq!(per_category, report.total_amount);
    }

    #[test]
    fn test_negative_amount_fails() {
        let mut bad = expense(CategoryLabel::Food, "10", "2024-01-05");
        bad.amount = Money::from_cents(-100);

        let err = aggregate(&[bad], &january()).unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_report_echoes_period_strings() {
        let report = aggregate(&[], &january()).unwrap();
        assert_eq!(report.start_date, "2024-01-01");
        assert_eq!(report.end_date, "2024-01-31");
    }
}
