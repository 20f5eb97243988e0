use tracing::{info, warn};

use crate::contracts::types::{CategoryReportData, LedgerWarning};
use crate::ledger::LedgerField;
use crate::transactions::date::format_iso_date;
use crate::transactions::types::{Ledger, Transaction};
use crate::transactions::window::{DateWindow, TRAILING_WINDOW_DAYS, resolve_trailing_window};
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub category: String,
    pub window: DateWindow,
    pub transactions: Vec<Transaction>,
    pub warnings: Vec<LedgerWarning>,
}

impl CategoryReport {
    pub fn to_data(&self, output_path: Option<String>) -> CategoryReportData {
        CategoryReportData {
            category: self.category.clone(),
            from: format_iso_date(&self.window.start),
            to: format_iso_date(&self.window.end),
            rows: self
                .transactions
                .iter()
                .map(Transaction::to_record)
                .collect(),
            warnings: self.warnings.clone(),
            output_path,
        }
    }
}

/// Spend in `category` over the 90 days ending at `reference_date` (today when omitted).
///
/// An empty ledger and a ledger without an operation-date column are errors.
/// Rows whose dates did not parse are dropped from the comparison and reported
/// as warnings. A report with no matching rows is still a success.
pub fn spending_by_category(
    ledger: &Ledger,
    category: &str,
    reference_date: Option<&str>,
) -> ClientResult<CategoryReport> {
    if ledger.is_empty() {
        warn!("category report requested for an empty ledger");
        return Err(ClientError::input_empty("ledger"));
    }
    if !ledger.has_operation_date {
        warn!("category report requested for a ledger without operation dates");
        return Err(ClientError::schema_missing(
            LedgerField::OperationDate.as_str(),
            &ledger.headers,
        ));
    }

    let window = resolve_trailing_window(reference_date, TRAILING_WINDOW_DAYS)?;
    let warnings = ledger.date_warnings().cloned().collect::<Vec<LedgerWarning>>();
    if !warnings.is_empty() {
        warn!(
            skipped = warnings.len(),
            "rows with unparsable dates skipped in category report"
        );
    }

    let wanted = category.to_lowercase();
    let transactions = ledger
        .transactions
        .iter()
        .filter(|row| row.category_text().to_lowercase() == wanted)
        .filter(|row| {
            row.operation_date
                .as_ref()
                .is_some_and(|date| window.contains(date))
        })
        .cloned()
        .collect::<Vec<Transaction>>();

    if transactions.is_empty() {
        warn!(category, "no spending found for category");
    } else {
        info!(
            category,
            from = %format_iso_date(&window.start),
            to = %format_iso_date(&window.end),
            rows = transactions.len(),
            "category report built"
        );
    }

    Ok(CategoryReport {
        category: category.to_string(),
        window,
        transactions,
        warnings,
    })
}
