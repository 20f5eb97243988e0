// Property checks for the aggregation engine.
// PROPTEST_CASES overrides the case count.

use proptest::prelude::*;
use spendsight_client::transactions::cards::aggregate_by_card;
use spendsight_client::transactions::search::search;
use spendsight_client::transactions::top::top_transactions;
use spendsight_client::transactions::types::{Transaction, TransactionStatus};

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn arb_status() -> impl Strategy<Value = TransactionStatus> {
    prop_oneof![
        4 => Just(TransactionStatus::Ok),
        1 => Just(TransactionStatus::Failed),
        1 => Just(TransactionStatus::Other(String::new())),
    ]
}

fn arb_card() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some("*1111".to_string())),
        Just(Some("*2222".to_string())),
        Just(Some("4276 5500 1234 7197".to_string())),
        Just(None),
    ]
}

fn arb_category() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some("Еда".to_string())),
        Just(Some("Транспорт".to_string())),
        Just(Some("Fast Food".to_string())),
        Just(None),
    ]
}

/// Amounts are whole cents so sums and ties are exact enough to compare.
fn arb_ledger(max_rows: usize) -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(
        (
            prop::option::weighted(0.9, -50_000i64..50_000i64),
            arb_status(),
            arb_card(),
            arb_category(),
        ),
        0..max_rows,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (cents, status, card_number, category))| Transaction {
                row: index as i64 + 1,
                operation_date: None,
                amount: cents.map(|value| value as f64 / 100.0),
                status,
                card_number,
                category,
                description: Some(format!("row-{}", index + 1)),
            })
            .collect()
    })
}

fn row_id(description: &str) -> i64 {
    description
        .trim_start_matches("row-")
        .parse::<i64>()
        .unwrap_or(-1)
}

proptest! {
    #![proptest_config(config())]
    #[test]
    fn top_list_is_capped_sorted_and_stable(
        ledger in arb_ledger(40),
        count in 0usize..8,
    ) {
        let qualifying = ledger.iter().filter(|row| row.is_qualifying_debit()).count();
        let top = top_transactions(&ledger, count);

        prop_assert_eq!(top.len(), qualifying.min(count));
        for pair in top.windows(2) {
            let (first, second) = (&pair[0], &pair[1]);
            prop_assert!(first.amount.abs() >= second.amount.abs());
            if first.amount.abs() == second.amount.abs() {
                prop_assert!(row_id(&first.description) < row_id(&second.description));
            }
        }
        for entry in &top {
            prop_assert!(entry.amount < 0.0);
        }
    }

    #[test]
    fn card_totals_add_up_to_qualifying_spend(ledger in arb_ledger(60)) {
        let cards = aggregate_by_card(&ledger);
        let expected = ledger
            .iter()
            .filter(|row| row.is_qualifying_debit())
            .map(Transaction::abs_amount)
            .sum::<f64>();
        let actual = cards.iter().map(|card| card.total_spent).sum::<f64>();

        prop_assert!((expected - actual).abs() < 0.005 * (cards.len() as f64 + 1.0));
        for card in &cards {
            prop_assert!(card.total_spent > 0.0);
            prop_assert!((card.cashback - card.total_spent / 100.0).abs() <= 0.005 + 1e-9);
        }
    }

    #[test]
    fn search_ignores_case_and_empty_query_keeps_everything(
        ledger in arb_ledger(30),
        query in prop_oneof![
            Just("еда".to_string()),
            Just("ТРАНС".to_string()),
            Just("food".to_string()),
            Just("row-1".to_string()),
        ],
    ) {
        let lower = search(&query.to_lowercase(), &ledger);
        let upper = search(&query.to_uppercase(), &ledger);
        prop_assert_eq!(&lower, &upper);
        prop_assert_eq!(search("", &ledger), ledger.clone());
    }
}
