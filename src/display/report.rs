//! Category report formatting for terminal output

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::reports::CategoryReport;

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Count")]
    count: u64,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format a percentage with appropriate precision
///
/// `pct` is already scaled to 0..=100.
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format the category breakdown as a table, followed by the grand total
pub fn format_category_report(report: &CategoryReport, currency_symbol: &str) -> String {
    let mut output = format!(
        "Expenses by category, {} to {}\n\n",
        report.start_date, report.end_date
    );

    let rows: Vec<BreakdownRow> = report
        .breakdown_rows()
        .map(|summary| {
            let share = report.share_of(summary);
            BreakdownRow {
                category: summary.category.to_string(),
                total: summary.total.format_with_symbol(currency_symbol),
                count: summary.count,
                share: format_percentage(share * 100.0),
                bar: format_bar(share, 1.0, 20),
            }
        })
        .collect();

    if rows.is_empty() {
        output.push_str("No expenses in this period.\n");
    } else {
        let table = Table::new(rows)
            .with(Style::sharp())
            .modify(Columns::new(1..4), Alignment::right())
            .to_string();
        output.push_str(&table);
        output.push('\n');
    }

    output.push_str(&format!(
        "\nTotal: {} across {} expense(s)\n",
        report.total_amount.format_with_symbol(currency_symbol),
        report.expense_count()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryLabel, ExpenseRecord, Money, UserId};
    use crate::reports::build_category_report;
    use chrono::NaiveDate;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(55.5), "56%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 10), "█████░░░░░");
        assert_eq!(format_bar(0.0, 10.0, 4), "    ");
        assert_eq!(format_bar(20.0, 10.0, 4), "████");
    }

    #[test]
    fn test_format_category_report() {
        let owner = UserId::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let records = vec![
            ExpenseRecord::new(owner, "Groceries", Money::from_cents(15000), date, CategoryLabel::Food),
            ExpenseRecord::new(owner, "Bus", Money::from_cents(5000), date, CategoryLabel::Transportation),
        ];
        let report = build_category_report(&records, "2024-01-01", "2024-01-31").unwrap();
        let output = format_category_report(&report, "$");

        assert!(output.contains("2024-01-01 to 2024-01-31"));
        assert!(output.contains("FOOD"));
        assert!(output.contains("$150.00"));
        assert!(output.contains("75%"));
        assert!(output.contains("TRANSPORTATION"));
        assert!(!output.contains("HEALTHCARE"));
        assert!(output.contains("Total: $200.00 across 2 expense(s)"));
    }

    #[test]
    fn test_format_empty_report() {
        let report = build_category_report(&[], "2024-01-01", "2024-01-31").unwrap();
        let output = format_category_report(&report, "$");

        assert!(output.contains("No expenses in this period."));
        assert!(output.contains("Total: $0.00 across 0 expense(s)"));
    }
}
