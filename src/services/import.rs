//! Expense record loading
//!
//! Reads expense records from JSON arrays or CSV files. Every record is
//! validated before it is handed to the report or listing services, so a
//! negative amount or an unknown label fails the load rather than the report.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::{CategoryLabel, ExpenseId, ExpenseRecord, Money, UserId};
use crate::reports::DATE_FORMAT;

/// Column names expected in a CSV header row
pub const CSV_HEADERS: [&str; 7] = [
    "id",
    "title",
    "amount",
    "occurredOn",
    "category",
    "notes",
    "ownerId",
];

/// Input file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Guess the format from a file extension; anything but `.csv` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::Json,
        }
    }
}

/// Load records from a file, picking the parser from the extension
pub fn load_expenses_file(path: &Path) -> ReportResult<Vec<ExpenseRecord>> {
    let file = std::fs::File::open(path).map_err(|e| {
        ReportError::Io(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let records = match InputFormat::from_path(path) {
        InputFormat::Csv => load_expenses_csv(file)?,
        InputFormat::Json => load_expenses_json(file)?,
    };

    debug!("Loaded {} expense(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Load records from a JSON array
pub fn load_expenses_json<R: Read>(reader: R) -> ReportResult<Vec<ExpenseRecord>> {
    let records: Vec<ExpenseRecord> = serde_json::from_reader(reader)?;
    for record in &records {
        record.validate()?;
    }
    Ok(records)
}

/// Load records from CSV with a header row
///
/// Columns are matched by name, so their order does not matter. `id` and
/// `notes` may be left empty.
pub fn load_expenses_csv<R: Read>(reader: R) -> ReportResult<Vec<ExpenseRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = CsvColumns::from_headers(&headers)?;

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        // Header is line 1
        let line = idx + 2;
        let record = columns.parse(&row, line)?;
        record.validate()?;
        records.push(record);
    }

    Ok(records)
}

struct CsvColumns {
    id: usize,
    title: usize,
    amount: usize,
    occurred_on: usize,
    category: usize,
    notes: usize,
    owner_id: usize,
}

impl CsvColumns {
    fn from_headers(headers: &StringRecord) -> ReportResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| ReportError::Csv(format!("Missing CSV column '{}'", name)))
        };

        Ok(Self {
            id: find(CSV_HEADERS[0])?,
            title: find(CSV_HEADERS[1])?,
            amount: find(CSV_HEADERS[2])?,
            occurred_on: find(CSV_HEADERS[3])?,
            category: find(CSV_HEADERS[4])?,
            notes: find(CSV_HEADERS[5])?,
            owner_id: find(CSV_HEADERS[6])?,
        })
    }

    fn parse(&self, row: &StringRecord, line: usize) -> ReportResult<ExpenseRecord> {
        let field = |idx: usize| row.get(idx).unwrap_or("");
        let invalid = |msg: String| ReportError::Validation(format!("Line {}: {}", line, msg));

        let id = match field(self.id) {
            "" => ExpenseId::new(),
            s => s
                .parse::<ExpenseId>()
                .map_err(|e| invalid(format!("Invalid id '{}': {}", s, e)))?,
        };

        let amount = Money::parse(field(self.amount))
            .map_err(|e| invalid(format!("Could not parse amount: {}", e)))?;

        let date_str = field(self.occurred_on);
        let occurred_on = NaiveDate::parse_from_str(date_str, DATE_FORMAT)
            .map_err(|_| invalid(format!("Could not parse date: '{}'", date_str)))?;

        let category: CategoryLabel = field(self.category).parse()?;

        let owner_str = field(self.owner_id);
        let owner_id = owner_str
            .parse::<UserId>()
            .map_err(|e| invalid(format!("Invalid ownerId '{}': {}", owner_str, e)))?;

        let notes = match field(self.notes) {
            "" => None,
            s => Some(s.to_string()),
        };

        Ok(ExpenseRecord {
            id,
            title: field(self.title).to_string(),
            amount,
            occurred_on,
            category,
            notes,
            owner_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const OWNER: &str = "0b6c0f6e-4f0e-4a59-9d44-2f5a7b1f8c11";

    #[test]
    fn test_load_csv() {
        let csv_data = format!(
            "id,title,amount,occurredOn,category,notes,ownerId\n\
             ,Groceries,100.00,2024-01-15,FOOD,weekly shop,{owner}\n\
             ,Bus pass, 45.50 ,2024-01-16,transportation,,{owner}\n",
            owner = OWNER
        );

        let records = load_expenses_csv(csv_data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Groceries");
        assert_eq!(records[0].amount, Money::from_cents(10000));
        assert_eq!(records[0].notes.as_deref(), Some("weekly shop"));
        assert_eq!(records[1].category, CategoryLabel::Transportation);
        assert_eq!(records[1].amount, Money::from_cents(4550));
        assert_eq!(records[1].notes, None);
        assert_eq!(records[0].owner_id, records[1].owner_id);
    }

    #[test]
    fn test_csv_columns_in_any_order() {
        let csv_data = format!(
            "ownerId,category,amount,title,occurredOn,id,notes\n\
             {},OTHER,3.00,Stamps,2024-02-01,,\n",
            OWNER
        );

        let records = load_expenses_csv(csv_data.as_bytes()).unwrap();
        assert_eq!(records[0].category, CategoryLabel::Other);
        assert_eq!(records[0].title, "Stamps");
    }

    #[test]
    fn test_csv_missing_column() {
        let err = load_expenses_csv("title,amount\nx,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::Csv(_)));
    }

    #[test]
    fn test_csv_bad_row_reports_line() {
        let csv_data = format!(
            "id,title,amount,occurredOn,category,notes,ownerId\n\
             ,Lunch,12.00,15/01/2024,FOOD,,{}\n",
            OWNER
        );

        let err = load_expenses_csv(csv_data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Line 2"));
    }

    #[test]
    fn test_csv_unknown_category_is_contract_violation() {
        let csv_data = format!(
            "id,title,amount,occurredOn,category,notes,ownerId\n\
             ,Vet,80.00,2024-01-15,PETS,,{}\n",
            OWNER
        );

        let err = load_expenses_csv(csv_data.as_bytes()).unwrap_err();
        assert_eq!(err, ReportError::UnknownCategory("PETS".into()));
    }

    #[test]
    fn test_csv_rejects_negative_amount() {
        let csv_data = format!(
            "id,title,amount,occurredOn,category,notes,ownerId\n\
             ,Refund,-5.00,2024-01-15,FOOD,,{}\n",
            OWNER
        );

        let err = load_expenses_csv(csv_data.as_bytes()).unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_load_json() {
        let json = format!(
            r#"[{{
                "id": "3f1d2c4b-5a69-4e7d-8c0b-1a2b3c4d5e6f",
                "title": "Cinema",
                "amount": 24.5,
                "expenseDate": "2024-03-09",
                "category": "ENTERTAINMENT",
                "userId": "{}"
            }}]"#,
            OWNER
        );

        let records = load_expenses_json(json.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, Money::from_cents(2450));
        assert_eq!(
            records[0].occurred_on,
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
    }

    #[test]
    fn test_json_unknown_category_fails() {
        let json = format!(
            r#"[{{"id": "3f1d2c4b-5a69-4e7d-8c0b-1a2b3c4d5e6f", "title": "x",
                 "amount": 1, "occurredOn": "2024-03-09", "category": "PETS",
                 "ownerId": "{}"}}]"#,
            OWNER
        );

        assert!(load_expenses_json(json.as_bytes()).is_err());
    }

    #[test]
    fn test_load_file_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("expenses.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "id,title,amount,occurredOn,category,notes,ownerId").unwrap();
        writeln!(file, ",Water bill,30.00,2024-04-02,UTILITIES,,{}", OWNER).unwrap();
        drop(file);

        let records = load_expenses_file(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, CategoryLabel::Utilities);

        let missing = load_expenses_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(missing, ReportError::Io(_)));
    }
}
