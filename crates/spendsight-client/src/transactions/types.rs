use chrono::NaiveDateTime;

use crate::contracts::types::{LedgerWarning, TransactionRecord};
use crate::transactions::date::format_timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionStatus {
    Ok,
    Failed,
    Other(String),
}

impl TransactionStatus {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("OK") => Self::Ok,
            Some("FAILED") => Self::Failed,
            Some(other) => Self::Other(other.to_string()),
            None => Self::Other(String::new()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::Failed => "FAILED",
            Self::Other(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub row: i64,
    /// `None` when the source value was missing or did not parse.
    pub operation_date: Option<NaiveDateTime>,
    pub amount: Option<f64>,
    pub status: TransactionStatus,
    pub card_number: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl Transaction {
    /// A debit with status OK; the only rows that count as spend.
    pub fn is_qualifying_debit(&self) -> bool {
        self.status == TransactionStatus::Ok && self.amount.is_some_and(|amount| amount < 0.0)
    }

    pub fn abs_amount(&self) -> f64 {
        self.amount.map(f64::abs).unwrap_or(0.0)
    }

    pub fn category_text(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn to_record(&self) -> TransactionRecord {
        TransactionRecord {
            row: self.row,
            operation_date: self.operation_date.as_ref().map(format_timestamp),
            amount: self.amount,
            status: self.status.as_str().to_string(),
            card_number: self.card_number.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }
}

/// A normalized ledger snapshot. Built once per invocation and only borrowed afterwards.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub headers: Vec<String>,
    pub has_operation_date: bool,
    pub transactions: Vec<Transaction>,
    pub warnings: Vec<LedgerWarning>,
}

impl Ledger {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn date_warnings(&self) -> impl Iterator<Item = &LedgerWarning> {
        self.warnings
            .iter()
            .filter(|warning| warning.code == "invalid_date")
    }
}
