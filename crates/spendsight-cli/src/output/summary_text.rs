use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_summary(data: &Value) -> io::Result<String> {
    let greeting = data
        .get("greeting")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("summary output requires a greeting"))?;

    let mut lines = vec![format!("{greeting}!"), String::new()];
    lines.extend(cards_section(format::rows_of(data, "cards")));
    lines.push(String::new());
    lines.extend(top_section(format::rows_of(data, "top_transactions")));

    let quotes = quotes_section(
        format::rows_of(data, "currency_rates"),
        format::rows_of(data, "stock_prices"),
    );
    if !quotes.is_empty() {
        lines.push(String::new());
        lines.extend(quotes);
    }

    if let Some(search) = data.get("search") {
        lines.push(String::new());
        lines.extend(search_section(search));
    }

    Ok(lines.join("\n"))
}

fn cards_section(cards: &[Value]) -> Vec<String> {
    if cards.is_empty() {
        return vec!["Cards: no spending this month.".to_string()];
    }

    let columns = [
        Column {
            name: "Card",
            align: Align::Left,
        },
        Column {
            name: "Spent",
            align: Align::Right,
        },
        Column {
            name: "Cashback",
            align: Align::Right,
        },
    ];
    let rows = cards
        .iter()
        .map(|card| {
            vec![
                format::text_field(card, "last_digits"),
                format::money_field(card, "total_spent"),
                format::money_field(card, "cashback"),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    let mut lines = vec!["Cards (month to date):".to_string()];
    lines.extend(format::render_table(&columns, &rows));
    lines
}

fn top_section(top: &[Value]) -> Vec<String> {
    if top.is_empty() {
        return vec!["Top transactions: none this month.".to_string()];
    }

    let mut lines = vec!["Top transactions:".to_string()];
    lines.extend(transaction_table(top));
    lines
}

fn transaction_table(rows: &[Value]) -> Vec<String> {
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
                format::text_field(row, "date"),
                format::money_field(row, "amount"),
                format::text_field(row, "category"),
                format::text_field(row, "description"),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    format::render_table(&columns, &table_rows)
}

fn quotes_section(rates: &[Value], prices: &[Value]) -> Vec<String> {
    let mut entries = rates
        .iter()
        .map(|rate| {
            (
                format::text_field(rate, "currency"),
                format!("{} RUB", format::money_field(rate, "rate")),
            )
        })
        .collect::<Vec<(String, String)>>();
    entries.extend(prices.iter().map(|price| {
        (
            format::text_field(price, "stock"),
            format::money_field(price, "price"),
        )
    }));
    if entries.is_empty() {
        return Vec::new();
    }

    let borrowed = entries
        .iter()
        .map(|(label, value)| (label.as_str(), value.clone()))
        .collect::<Vec<(&str, String)>>();
    let mut lines = vec!["Quotes:".to_string()];
    lines.extend(format::key_value_rows(&borrowed));
    lines
}

fn search_section(search: &Value) -> Vec<String> {
    let query = format::text_field(search, "query");
    let rows = format::rows_of(search, "rows");
    if rows.is_empty() {
        return vec![format!("No top transactions match \"{query}\".")];
    }

    let mut lines = vec![format!("Top transactions matching \"{query}\":")];
    lines.extend(transaction_table(rows));
    lines
}
