use std::path::Path;

use calamine::{Data, Reader, Sheets, open_workbook_auto};
use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::ledger::{LedgerField, RawLedger, RawRow};
use crate::transactions::date::format_timestamp;
use crate::{ClientError, ClientResult};

pub(crate) fn read_first_sheet(path: &Path) -> ClientResult<RawLedger> {
    let mut workbook: Sheets<_> = open_workbook_auto(path)
        .map_err(|error| ClientError::ledger_unreadable(path, &error.to_string()))?;

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Ok(RawLedger::default());
    };
    let range = workbook.worksheet_range(&sheet_name).map_err(|error| {
        ClientError::ledger_unreadable(path, &format!("sheet `{sheet_name}`: {error}"))
    })?;

    let mut rows_iter = range.rows();
    let Some(header_cells) = rows_iter.next() else {
        return Ok(RawLedger::default());
    };
    let headers = header_cells
        .iter()
        .map(|cell| cell_text(cell).unwrap_or_default())
        .collect::<Vec<String>>();
    let fields = headers
        .iter()
        .map(|header| LedgerField::from_header(header))
        .collect::<Vec<Option<LedgerField>>>();

    let mut rows = Vec::new();
    for (row_index, cells) in rows_iter.enumerate() {
        if cells.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        let mut row = RawRow {
            row: (row_index as i64) + 1,
            ..RawRow::default()
        };
        for (cell, field) in cells.iter().zip(fields.iter()) {
            let Some(field) = field else {
                continue;
            };
            let value = match field {
                LedgerField::CardNumber => match cell {
                    Data::String(text) => non_empty(text),
                    _ => None,
                },
                _ => cell_text(cell),
            };
            row.set(*field, value);
        }
        rows.push(row);
    }

    Ok(RawLedger { headers, rows })
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => non_empty(text),
        Data::Float(value) => Some(value.to_string()),
        Data::Int(value) => Some(value.to_string()),
        Data::Bool(value) => Some(value.to_string()),
        Data::DateTime(value) => {
            excel_serial_to_datetime(value.as_f64()).map(|timestamp| format_timestamp(&timestamp))
        }
    }
}

// 9999-12-31, the last day spreadsheets can represent.
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// Converts a 1900-system serial (days since 1899-12-30) into a timestamp.
fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..MAX_EXCEL_SERIAL + 1.0).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let seconds = (serial * 86_400.0).round() as i64;
    epoch.checked_add_signed(Duration::try_seconds(seconds)?)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
