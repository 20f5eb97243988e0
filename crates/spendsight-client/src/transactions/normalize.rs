use tracing::warn;

use crate::contracts::types::LedgerWarning;
use crate::ledger::{LedgerField, RawLedger, RawRow};
use crate::transactions::date::parse_operation_date;
use crate::transactions::types::{Ledger, Transaction, TransactionStatus};

/// Builds a normalized copy of `raw`. The raw table is left untouched.
pub fn normalize_ledger(raw: &RawLedger) -> Ledger {
    let has_operation_date = raw.has_field(LedgerField::OperationDate);
    let has_amount = raw.has_field(LedgerField::Amount);
    let mut warnings = Vec::new();
    let transactions = raw
        .rows
        .iter()
        .map(|row| normalize_row(row, has_operation_date, has_amount, &mut warnings))
        .collect::<Vec<Transaction>>();

    let invalid_dates = warnings
        .iter()
        .filter(|warning| warning.code == "invalid_date")
        .count();
    if invalid_dates > 0 {
        warn!(
            invalid_dates,
            total = transactions.len(),
            "some operation dates could not be parsed; those rows are excluded from date windows"
        );
    }

    Ledger {
        headers: raw.headers.clone(),
        has_operation_date,
        transactions,
        warnings,
    }
}

fn normalize_row(
    raw: &RawRow,
    has_operation_date: bool,
    has_amount: bool,
    warnings: &mut Vec<LedgerWarning>,
) -> Transaction {
    let operation_date = raw.operation_date.as_deref().and_then(parse_operation_date);
    if has_operation_date && operation_date.is_none() {
        let message = match raw.operation_date.as_deref() {
            Some(value) => format!("operation_date \"{value}\" is not a recognised date"),
            None => "operation_date is empty".to_string(),
        };
        warnings.push(LedgerWarning {
            row: raw.row,
            field: LedgerField::OperationDate.as_str().to_string(),
            code: "invalid_date".to_string(),
            message,
        });
    }

    let amount = raw.amount.as_deref().and_then(parse_amount);
    if has_amount && amount.is_none() {
        warnings.push(LedgerWarning {
            row: raw.row,
            field: LedgerField::Amount.as_str().to_string(),
            code: "invalid_amount".to_string(),
            message: format!(
                "amount \"{}\" is not a number",
                raw.amount.as_deref().unwrap_or_default()
            ),
        });
    }

    Transaction {
        row: raw.row,
        operation_date,
        amount,
        status: TransactionStatus::parse(raw.status.as_deref()),
        card_number: raw.card_number.clone(),
        category: raw.category.clone(),
        description: raw.description.clone(),
    }
}

/// Accepts `-1000.5`, `-1 000,50`, `1,000.50` and `-1.234,56`.
/// With both separators present, whichever comes last is the decimal mark.
pub fn parse_amount(value: &str) -> Option<f64> {
    let compact = value
        .trim()
        .chars()
        .filter(|character| !matches!(character, ' ' | '\u{a0}' | '\u{202f}'))
        .collect::<String>();
    if compact.is_empty() {
        return None;
    }

    let normalized = match (compact.rfind('.'), compact.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => compact.replace('.', "").replace(',', "."),
        (Some(_), _) => compact.replace(',', ""),
        (None, _) => compact.replace(',', "."),
    };
    let parsed = normalized.parse::<f64>().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Some(parsed)
}
