//! Reading ledgers from disk into a [`RawLedger`].
//!
//! Readers only lift cells into strings. Interpreting dates, amounts and
//! statuses happens in [`crate::transactions::normalize`], which returns a new
//! value and never touches the raw table.

pub(crate) mod parse;
pub(crate) mod spreadsheet;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerField {
    OperationDate,
    Amount,
    Status,
    CardNumber,
    Category,
    Description,
}

impl LedgerField {
    pub const ALL: [LedgerField; 6] = [
        Self::OperationDate,
        Self::Amount,
        Self::Status,
        Self::CardNumber,
        Self::Category,
        Self::Description,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OperationDate => "operation_date",
            Self::Amount => "amount",
            Self::Status => "status",
            Self::CardNumber => "card_number",
            Self::Category => "category",
            Self::Description => "description",
        }
    }

    /// Header spelling used by the bank's spreadsheet export.
    pub const fn export_header(self) -> &'static str {
        match self {
            Self::OperationDate => "Дата операции",
            Self::Amount => "Сумма операции",
            Self::Status => "Статус",
            Self::CardNumber => "Номер карты",
            Self::Category => "Категория",
            Self::Description => "Описание",
        }
    }

    pub fn from_header(header: &str) -> Option<Self> {
        let trimmed = header.trim();
        Self::ALL.into_iter().find(|field| {
            trimmed == field.export_header() || trimmed.eq_ignore_ascii_case(field.as_str())
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub row: i64,
    pub operation_date: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
    /// Only filled from text cells; numeric or missing card cells stay `None`.
    pub card_number: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl RawRow {
    pub(crate) fn set(&mut self, field: LedgerField, value: Option<String>) {
        match field {
            LedgerField::OperationDate => self.operation_date = value,
            LedgerField::Amount => self.amount = value,
            LedgerField::Status => self.status = value,
            LedgerField::CardNumber => self.card_number = value,
            LedgerField::Category => self.category = value,
            LedgerField::Description => self.description = value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawLedger {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawLedger {
    pub fn has_field(&self, field: LedgerField) -> bool {
        self.headers
            .iter()
            .any(|header| LedgerField::from_header(header) == Some(field))
    }
}

pub fn load_ledger(path: &Path) -> ClientResult<RawLedger> {
    let extension = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let ledger = match extension.as_str() {
        "csv" => parse::parse_csv(&read_text(path)?, path)?,
        "json" => parse::parse_json(&read_text(path)?, path)?,
        "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => spreadsheet::read_first_sheet(path)?,
        _ => {
            return Err(ClientError::invalid_argument_with_recovery(
                &format!("Unsupported ledger format `{}`.", path.display()),
                vec!["Use a .csv, .json, .xlsx, .xls, .xlsm or .ods ledger.".to_string()],
            ));
        }
    };

    info!(
        path = %path.display(),
        rows = ledger.rows.len(),
        "ledger loaded"
    );
    Ok(ledger)
}

pub(crate) fn read_text(path: &Path) -> ClientResult<String> {
    fs::read_to_string(path)
        .map_err(|error| ClientError::ledger_unreadable(path, &error.to_string()))
}
