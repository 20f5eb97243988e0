use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_category_report(data: &Value) -> io::Result<String> {
    let category = data
        .get("category")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("category report output requires a category"))?;
    let rows = format::rows_of(data, "rows");
    let warnings = format::rows_of(data, "warnings");

    let total = rows
        .iter()
        .filter_map(|row| row.get("amount").and_then(Value::as_f64))
        .sum::<f64>();
    let mut entries = vec![
        ("Category", category.to_string()),
        ("From", format::text_field(data, "from")),
        ("To", format::text_field(data, "to")),
        ("Rows", rows.len().to_string()),
        ("Total", format::format_money(total)),
    ];
    if let Some(path) = data.get("output_path").and_then(Value::as_str) {
        entries.push(("Written to", path.to_string()));
    }

    let mut lines = vec!["Category report".to_string()];
    lines.extend(format::key_value_rows(&entries));
    lines.push(String::new());

    if rows.is_empty() {
        lines.push(format!("No spending in \"{category}\" for this window."));
    } else {
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
                name: "Status",
                align: Align::Left,
            },
            Column {
                name: "Card",
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
                    format::text_field(row, "operation_date"),
                    format::money_field(row, "amount"),
                    format::text_field(row, "status"),
                    format::text_field(row, "card_number"),
                    format::text_field(row, "description"),
                ]
            })
            .collect::<Vec<Vec<String>>>();
        lines.extend(format::render_table(&columns, &table_rows));
    }

    if !warnings.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Skipped {} row(s) with unreadable dates:",
            warnings.len()
        ));
        for warning in warnings {
            let row = warning.get("row").and_then(Value::as_i64).unwrap_or(0);
            lines.push(format!(
                "  row {row}: {}",
                format::text_field(warning, "message")
            ));
        }
    }

    Ok(lines.join("\n"))
}
