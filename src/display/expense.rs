//! Expense list formatting
//!
//! Register-style rows for one page of expenses, plus a page footer.

use crate::models::ExpenseRecord;
use crate::pagination::{PaginatedResponse, PaginationMeta};

/// Format a single expense as a register row
pub fn format_expense_row(expense: &ExpenseRecord, currency_symbol: &str) -> String {
    format!(
        "{} {:14} {:28} {:>12}",
        expense.occurred_on.format("%Y-%m-%d"),
        expense.category.as_str(),
        truncate(&expense.title, 28),
        expense.amount.format_with_symbol(currency_symbol),
    )
}

/// Footer line describing where this page sits
pub fn format_page_footer(meta: &PaginationMeta) -> String {
    let mut footer = format!(
        "Page {} of {} ({} expense(s))",
        meta.page, meta.total_pages, meta.total
    );
    if meta.has_previous_page {
        footer.push_str("  [prev]");
    }
    if meta.has_next_page {
        footer.push_str("  [next]");
    }
    footer
}

/// Format one page of expenses as a register
pub fn format_expense_page(
    page: &PaginatedResponse<ExpenseRecord>,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();

    if page.data.is_empty() {
        output.push_str("No expenses found.\n");
    } else {
        output.push_str(&format!(
            "{:10} {:14} {:28} {:>12}\n",
            "Date", "Category", "Title", "Amount"
        ));
        output.push_str(&"-".repeat(67));
        output.push('\n');

        for expense in &page.data {
            output.push_str(&format_expense_row(expense, currency_symbol));
            output.push('\n');
        }
    }

    output.push_str(&format_page_footer(&page.meta));
    output.push('\n');
    output
}

/// Truncate a string to a maximum length with ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryLabel, Money, UserId};
    use crate::pagination::get_pagination_response;
    use chrono::NaiveDate;

    fn expense(title: &str, cents: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            UserId::new(),
            title,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            CategoryLabel::Shopping,
        )
    }

    #[test]
    fn test_format_expense_row() {
        let row = format_expense_row(&expense("Shoes", 8999), "$");
        assert!(row.starts_with("2024-06-03 SHOPPING"));
        assert!(row.contains("Shoes"));
        assert!(row.ends_with("$89.99"));
    }

    #[test]
    fn test_format_empty_page() {
        let page = get_pagination_response(Vec::<ExpenseRecord>::new(), 0, 10, 1).unwrap();
        let output = format_expense_page(&page, "$");

        assert!(output.contains("No expenses found."));
        assert!(output.contains("Page 1 of 0 (0 expense(s))"));
    }

    #[test]
    fn test_page_footer_marks_neighbours() {
        let page = get_pagination_response(vec![expense("Hat", 1500)], 25, 10, 2).unwrap();
        let footer = format_page_footer(&page.meta);

        assert_eq!(footer, "Page 2 of 3 (25 expense(s))  [prev]  [next]");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long expense title", 10), "a very ...");
    }
}
