use std::path::Path;

use serde_json::Value;

use crate::commands::load_normalized;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{JsonSearchData, SearchData, TransactionRecord};
use crate::ledger::read_text;
use crate::transactions::search::{search, search_json};
use crate::transactions::types::Transaction;
use crate::{ClientError, ClientResult};

/// Searches a ledger by description and category.
///
/// A `.json` path is searched as loose records, so any array of objects works,
/// with or without the ledger columns. Other formats go through the ledger loader.
pub fn run(query: &str, path: &str) -> ClientResult<SuccessEnvelope> {
    let path = Path::new(path);
    if is_json(path) {
        let body = read_text(path)?;
        let records = serde_json::from_str::<Value>(&body)
            .map_err(|err| ClientError::ledger_unreadable(path, &err.to_string()))?;
        let rows = search_json(query, &records)?;
        let data = JsonSearchData {
            query: query.to_string(),
            total: rows.len(),
            rows,
        };
        return success("search", data);
    }

    let ledger = load_normalized(path)?;
    let rows = search(query, &ledger.transactions)
        .iter()
        .map(Transaction::to_record)
        .collect::<Vec<TransactionRecord>>();
    let data = SearchData {
        query: query.to_string(),
        total: rows.len(),
        rows,
    };
    success("search", data)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|value| value.to_str())
        .is_some_and(|value| value.eq_ignore_ascii_case("json"))
}
