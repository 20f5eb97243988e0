#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use spendsight_client::SuccessEnvelope;
use tempfile::{Builder, TempDir};

pub const CSV_HEADER: &str = "Дата операции;Сумма операции;Статус;Номер карты;Категория;Описание";

pub fn temp_dir(prefix: &str) -> std::io::Result<TempDir> {
    Builder::new().prefix(prefix).tempdir()
}

pub fn write_file(base: &Path, name: &str, body: &str) -> std::io::Result<PathBuf> {
    let path = base.join(name);
    fs::write(&path, body)?;
    Ok(path)
}

pub fn write_csv_ledger(base: &Path, rows: &[&str]) -> std::io::Result<PathBuf> {
    let mut body = String::from(CSV_HEADER);
    body.push('\n');
    for row in rows {
        body.push_str(row);
        body.push('\n');
    }
    write_file(base, "operations.csv", &body)
}

pub fn write_json_ledger(base: &Path, rows: &[Value]) -> std::io::Result<PathBuf> {
    let body = serde_json::to_string_pretty(rows).map_err(std::io::Error::other)?;
    write_file(base, "operations.json", &body)
}

pub fn record(
    date: &str,
    amount: f64,
    status: &str,
    card: &str,
    category: &str,
    description: &str,
) -> Value {
    json!({
        "operation_date": date,
        "amount": amount,
        "status": status,
        "card_number": card,
        "category": category,
        "description": description,
    })
}

pub fn payload(result: Result<SuccessEnvelope, spendsight_client::ClientError>) -> Value {
    assert!(result.is_ok());
    if let Ok(success) = result {
        let value = serde_json::to_value(success);
        assert!(value.is_ok());
        if let Ok(value) = value {
            return value;
        }
    }
    Value::Null
}
