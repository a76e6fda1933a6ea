//! CLI command for listing expenses

use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

use crate::config::ReportSettings;
use crate::display::format_expense_page;
use crate::error::{ReportError, ReportResult};
use crate::models::CategoryLabel;
use crate::pagination::{PaginationParams, DEFAULT_LIMIT};
use crate::reports::DATE_FORMAT;
use crate::services::{list_expenses, load_expenses_file, ExpenseFilter};

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Expense records (JSON array or CSV)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Only expenses on or after this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Only expenses on or before this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Only expenses in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,

    /// Expenses per page
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Print the page as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Handle the list command
pub fn handle_list_command(settings: &ReportSettings, args: ListArgs) -> ReportResult<()> {
    let mut filter = ExpenseFilter::new();
    if let Some(start) = &args.start {
        filter = filter.from_date(parse_date("startDate", start)?);
    }
    if let Some(end) = &args.end {
        filter = filter.to_date(parse_date("endDate", end)?);
    }
    if let Some(category) = &args.category {
        filter = filter.in_category(category.parse::<CategoryLabel>()?);
    }

    let params = PaginationParams::new(args.page, args.limit);
    params.validate()?;

    let records = load_expenses_file(&args.input)?;
    let page = list_expenses(&records, &filter, &params)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print!("{}", format_expense_page(&page, &settings.currency_symbol));
    }

    Ok(())
}

fn parse_date(field: &'static str, value: &str) -> ReportResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ReportError::invalid_date(field, value))
}
