use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_search(data: &Value) -> io::Result<String> {
    let query = data
        .get("query")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("search output requires a query"))?;
    let rows = format::rows_of(data, "rows");
    if rows.is_empty() {
        return Ok(format!("No transactions match \"{query}\"."));
    }

    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Category",
            align: Align::Left,
        },
        Column {
            name: "Description",
            align: Align::Left,
        },
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                date_of(row),
                format::money_field(row, "amount"),
                format::text_field(row, "category"),
                format::text_field(row, "description"),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    let mut lines = vec![format!("{} match(es) for \"{query}\":", rows.len())];
    lines.extend(format::render_table(&columns, &table_rows));
    Ok(lines.join("\n"))
}

// Ledger rows carry `operation_date`; loose JSON records may use `date`.
fn date_of(row: &Value) -> String {
    let ledger_date = format::text_field(row, "operation_date");
    if ledger_date.is_empty() {
        return format::text_field(row, "date");
    }
    ledger_date
}
