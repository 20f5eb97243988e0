use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Value};

use crate::ledger::{LedgerField, RawLedger, RawRow};
use crate::{ClientError, ClientResult};

pub(crate) fn parse_csv(content: &str, path: &Path) -> ClientResult<RawLedger> {
    let trimmed = content.trim_start_matches('\u{feff}');
    if trimmed.trim().is_empty() {
        return Ok(RawLedger::default());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(detect_delimiter(trimmed))
        .flexible(true)
        .from_reader(trimmed.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| {
            ClientError::ledger_unreadable(path, "CSV header row is missing or unreadable.")
        })?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    let field_by_index = headers
        .iter()
        .enumerate()
        .filter_map(|(index, name)| LedgerField::from_header(name).map(|field| (index, field)))
        .collect::<HashMap<usize, LedgerField>>();

    let mut rows = Vec::new();
    for (row_index, result_row) in reader.records().enumerate() {
        let record = result_row.map_err(|error| {
            let detail = format!("CSV row {} is malformed: {error}", row_index + 1);
            ClientError::ledger_unreadable(path, &detail)
        })?;

        let mut row = RawRow {
            row: (row_index as i64) + 1,
            ..RawRow::default()
        };
        for (index, field) in &field_by_index {
            row.set(*field, record.get(*index).and_then(non_empty));
        }
        rows.push(row);
    }

    Ok(RawLedger { headers, rows })
}

pub(crate) fn parse_json(content: &str, path: &Path) -> ClientResult<RawLedger> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(RawLedger::default());
    }

    let parsed = serde_json::from_str::<Value>(trimmed).map_err(|error| {
        ClientError::ledger_unreadable(path, &format!("Invalid JSON: {error}"))
    })?;
    let Some(items) = parsed.as_array() else {
        return Err(ClientError::invalid_collection(json_kind(&parsed)));
    };

    let mut headers: Vec<String> = Vec::new();
    let mut rows = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            return Err(ClientError::invalid_collection(&format!(
                "an array holding {} at position {}",
                json_kind(item),
                index + 1
            )));
        };

        for key in object.keys() {
            if !headers.iter().any(|existing| existing == key) {
                headers.push(key.clone());
            }
        }
        rows.push(row_from_object((index as i64) + 1, object));
    }

    Ok(RawLedger { headers, rows })
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn row_from_object(row: i64, object: &Map<String, Value>) -> RawRow {
    let mut raw = RawRow {
        row,
        ..RawRow::default()
    };
    for (key, value) in object {
        let Some(field) = LedgerField::from_header(key) else {
            continue;
        };
        let cell = if field == LedgerField::CardNumber {
            value.as_str().and_then(non_empty)
        } else {
            read_optional_string(value)
        };
        raw.set(field, cell);
    }
    raw
}

fn read_optional_string(value: &Value) -> Option<String> {
    if value.is_null() {
        return None;
    }

    if let Some(string_value) = value.as_str() {
        return non_empty(string_value);
    }

    if let Some(number_value) = value.as_f64() {
        return Some(number_value.to_string());
    }

    Some(value.to_string())
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or_default();
    if first_line.matches(';').count() > first_line.matches(',').count() {
        return b';';
    }
    b','
}
