use std::collections::HashMap;

use tracing::info;

use crate::contracts::types::CardSummary;
use crate::transactions::round_to;
use crate::transactions::types::Transaction;

pub const CASHBACK_RATE: f64 = 0.01;
pub const UNKNOWN_CARD: &str = "N/A";

/// Groups qualifying debits by card. Groups come out in the order each card
/// first appears among the qualifying rows.
pub fn aggregate_by_card(transactions: &[Transaction]) -> Vec<CardSummary> {
    let mut order: Vec<Option<&str>> = Vec::new();
    let mut totals: HashMap<Option<&str>, f64> = HashMap::new();
    for transaction in transactions.iter().filter(|row| row.is_qualifying_debit()) {
        let key = transaction.card_number.as_deref();
        let total = totals.entry(key).or_insert_with(|| {
            order.push(key);
            0.0
        });
        *total += transaction.abs_amount();
    }

    let cards = order
        .into_iter()
        .map(|key| {
            let total_spent = round_to(totals.get(&key).copied().unwrap_or(0.0), 2);
            CardSummary {
                last_digits: last_digits(key),
                total_spent,
                cashback: round_to(total_spent * CASHBACK_RATE, 2),
            }
        })
        .collect::<Vec<CardSummary>>();
    info!(cards = cards.len(), "card totals aggregated");
    cards
}

fn last_digits(card_number: Option<&str>) -> String {
    let Some(card) = card_number else {
        return UNKNOWN_CARD.to_string();
    };
    let characters = card.chars().collect::<Vec<char>>();
    let start = characters.len().saturating_sub(4);
    characters[start..].iter().collect()
}
