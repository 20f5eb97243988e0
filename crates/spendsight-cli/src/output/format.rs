use serde_json::Value;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub align: Align,
}

const INDENT: &str = "  ";
const COLUMN_GAP: &str = "  ";

/// Widths are counted in characters; ledger text is mostly Cyrillic.
fn display_width(value: &str) -> usize {
    value.chars().count()
}

pub fn key_value_rows(entries: &[(&str, String)]) -> Vec<String> {
    let label_width = entries
        .iter()
        .map(|(label, _)| display_width(label))
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|(label, value)| {
            let padding = " ".repeat(label_width - display_width(label));
            format!("{INDENT}{label}{padding}  {value}")
        })
        .collect()
}

pub fn render_table(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let widths = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .chain(std::iter::once(display_width(column.name)))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<usize>>();

    let header = columns
        .iter()
        .map(|column| column.name.to_string())
        .collect::<Vec<String>>();
    let mut output = vec![format_row(columns, &header, &widths)];
    output.extend(rows.iter().map(|row| format_row(columns, row, &widths)));
    output
}

fn format_row(columns: &[Column<'_>], cells: &[String], widths: &[usize]) -> String {
    let rendered = columns
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(index, (column, width))| {
            let cell = cells.get(index).map(String::as_str).unwrap_or("");
            let padding = " ".repeat(width.saturating_sub(display_width(cell)));
            match column.align {
                Align::Left => format!("{cell}{padding}"),
                Align::Right => format!("{padding}{cell}"),
            }
        })
        .collect::<Vec<String>>()
        .join(COLUMN_GAP);
    format!("{INDENT}{}", rendered.trim_end())
}

pub fn format_money(value: f64) -> String {
    format!("{value:.2}")
}

pub fn text_field(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

pub fn money_field(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_f64)
        .map(format_money)
        .unwrap_or_default()
}

pub fn rows_of<'a>(data: &'a Value, key: &str) -> &'a [Value] {
    data.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::{Align, Column, format_money, key_value_rows, render_table};

    #[test]
    fn table_pads_by_characters_not_bytes() {
        let columns = [
            Column {
                name: "Card",
                align: Align::Left,
            },
            Column {
                name: "Spent",
                align: Align::Right,
            },
        ];
        let rows = vec![
            vec!["Магнит".to_string(), "1.00".to_string()],
            vec!["N/A".to_string(), "100.00".to_string()],
        ];

        let lines = render_table(&columns, &rows);
        assert_eq!(lines[0], "  Card     Spent");
        assert_eq!(lines[1], "  Магнит    1.00");
        assert_eq!(lines[2], "  N/A     100.00");
    }

    #[test]
    fn key_value_rows_align_labels() {
        let lines = key_value_rows(&[
            ("From", "2023-07-02".to_string()),
            ("Category", "Еда".to_string()),
        ]);
        assert_eq!(lines[0], "  From      2023-07-02");
        assert_eq!(lines[1], "  Category  Еда");
    }

    #[test]
    fn money_keeps_two_decimals() {
        assert_eq!(format_money(-1200.0), "-1200.00");
        assert_eq!(format_money(10.5), "10.50");
    }
}
