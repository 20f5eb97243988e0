use serde_json::Value;
use tracing::info;

use crate::contracts::types::TopTransaction;
use crate::ledger::parse::json_kind;
use crate::transactions::types::Transaction;
use crate::{ClientError, ClientResult};

/// Records that expose the two free-text fields search looks at.
/// A missing field reads as the empty string.
pub trait Searchable {
    fn description(&self) -> &str;
    fn category(&self) -> &str;
}

impl Searchable for Transaction {
    fn description(&self) -> &str {
        self.description_text()
    }

    fn category(&self) -> &str {
        self.category_text()
    }
}

impl Searchable for TopTransaction {
    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Searchable for Value {
    fn description(&self) -> &str {
        self.get("description").and_then(Value::as_str).unwrap_or("")
    }

    fn category(&self) -> &str {
        self.get("category").and_then(Value::as_str).unwrap_or("")
    }
}

pub fn matches<T: Searchable + ?Sized>(query_lower: &str, record: &T) -> bool {
    record.description().to_lowercase().contains(query_lower)
        || record.category().to_lowercase().contains(query_lower)
}

/// Case-insensitive substring search over description and category. Input order is kept.
pub fn search<T: Searchable + Clone>(query: &str, records: &[T]) -> Vec<T> {
    let query_lower = query.to_lowercase();
    let found = records
        .iter()
        .filter(|record| matches(&query_lower, *record))
        .cloned()
        .collect::<Vec<T>>();
    info!(query, found = found.len(), "search finished");
    found
}

/// Search over loosely-typed records. Anything other than a JSON array is rejected.
pub fn search_json(query: &str, records: &Value) -> ClientResult<Vec<Value>> {
    let Some(items) = records.as_array() else {
        return Err(ClientError::invalid_collection(json_kind(records)));
    };
    Ok(search(query, items))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{search, search_json};

    fn records() -> Value {
        json!([
            {"description": "Покупка продуктов", "category": "Еда"},
            {"description": "Кофе", "category": "Еда"},
            {"description": "Такси", "category": "Транспорт"}
        ])
    }

    #[test]
    fn finds_matches_in_category_regardless_of_case() {
        let lower = search_json("еда", &records());
        let upper = search_json("ЕДА", &records());
        assert!(lower.is_ok());
        assert!(upper.is_ok());
        if let (Ok(lower_rows), Ok(upper_rows)) = (lower, upper) {
            assert_eq!(lower_rows.len(), 2);
            assert_eq!(lower_rows[0]["description"], "Покупка продуктов");
            assert_eq!(lower_rows[1]["description"], "Кофе");
            assert_eq!(lower_rows, upper_rows);
        }
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let all = search_json("", &records());
        assert!(all.is_ok());
        if let Ok(rows) = all {
            assert_eq!(Value::Array(rows), records());
        }
    }

    #[test]
    fn records_without_text_fields_only_match_empty_query() {
        let items = vec![json!({"amount": 10}), json!(42)];
        assert!(search("a", &items).is_empty());
        assert_eq!(search("", &items).len(), 2);
    }

    #[test]
    fn non_array_collections_are_structured_errors() {
        for value in [Value::Null, json!({"description": "Кофе"}), json!("Кофе")] {
            let result = search_json("кофе", &value);
            assert!(result.is_err());
            if let Err(error) = result {
                assert_eq!(error.code, "invalid_collection");
            }
        }
    }
}
