use std::fs;
use std::path::Path;

use tracing::info;

use crate::contracts::types::TransactionRecord;
use crate::transactions::category::CategoryReport;
use crate::transactions::types::Transaction;
use crate::{ClientError, ClientResult};

pub const DEFAULT_REPORT_FILE: &str = "default_report.json";

/// Writes the report rows as a pretty-printed JSON array. Non-ASCII text is written as-is.
pub fn write_report(path: &Path, report: &CategoryReport) -> ClientResult<()> {
    let rows = report
        .transactions
        .iter()
        .map(Transaction::to_record)
        .collect::<Vec<TransactionRecord>>();
    let body = serde_json::to_string_pretty(&rows)
        .map_err(|err| ClientError::internal_serialization(&err.to_string()))?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|err| ClientError::report_write_failed(path, &err.to_string()))?;
    }
    fs::write(path, body)
        .map_err(|err| ClientError::report_write_failed(path, &err.to_string()))?;

    info!(path = %path.display(), rows = rows.len(), "category report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::NaiveDate;
    use serde_json::Value;
    use tempfile::tempdir;

    use super::write_report;
    use crate::transactions::category::CategoryReport;
    use crate::transactions::date::parse_operation_date;
    use crate::transactions::types::{Transaction, TransactionStatus};
    use crate::transactions::window::DateWindow;

    fn report() -> CategoryReport {
        let end = NaiveDate::from_ymd_opt(2021, 10, 20).unwrap_or_default();
        let start = NaiveDate::from_ymd_opt(2021, 7, 22).unwrap_or_default();
        CategoryReport {
            category: "Фастфуд".to_string(),
            window: DateWindow { start, end },
            transactions: vec![Transaction {
                row: 4,
                operation_date: parse_operation_date("2021-10-01 09:15:00"),
                amount: Some(-349.0),
                status: TransactionStatus::Ok,
                card_number: Some("*7197".to_string()),
                category: Some("Фастфуд".to_string()),
                description: Some("Бургер Кинг".to_string()),
            }],
            warnings: Vec::new(),
        }
    }

    #[test]
    fn writes_rows_as_pretty_json_array_with_cyrillic_intact() {
        let dir = tempdir();
        assert!(dir.is_ok());
        if let Ok(dir) = dir {
            let path = dir.path().join("nested").join("report.json");
            assert!(write_report(&path, &report()).is_ok());

            let body = fs::read_to_string(&path).unwrap_or_default();
            assert!(body.contains("Бургер Кинг"));
            assert!(body.contains("\n  {"));
            let parsed = serde_json::from_str::<Value>(&body).unwrap_or_default();
            assert_eq!(parsed.as_array().map(Vec::len), Some(1));
            assert_eq!(parsed[0]["operation_date"], "2021-10-01 09:15:00");
        }
    }

    #[test]
    fn unwritable_target_maps_to_report_write_failed() {
        let dir = tempdir();
        assert!(dir.is_ok());
        if let Ok(dir) = dir {
            let result = write_report(dir.path(), &report());
            assert!(result.is_err());
            if let Err(error) = result {
                assert_eq!(error.code, "report_write_failed");
            }
        }
    }
}
