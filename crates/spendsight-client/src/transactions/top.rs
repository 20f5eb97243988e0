use tracing::info;

use crate::contracts::types::TopTransaction;
use crate::transactions::date::format_day_month_year;
use crate::transactions::round_to;
use crate::transactions::types::Transaction;

pub const DEFAULT_TOP_COUNT: usize = 5;

/// Largest qualifying debits by absolute amount. The sort is stable, so rows
/// with equal magnitude keep their input order.
pub fn top_transactions(transactions: &[Transaction], count: usize) -> Vec<TopTransaction> {
    let mut debits = transactions
        .iter()
        .filter(|row| row.is_qualifying_debit())
        .collect::<Vec<&Transaction>>();
    debits.sort_by(|left, right| right.abs_amount().total_cmp(&left.abs_amount()));

    let top = debits
        .into_iter()
        .take(count)
        .map(|row| TopTransaction {
            date: row
                .operation_date
                .as_ref()
                .map(format_day_month_year)
                .unwrap_or_default(),
            amount: round_to(row.amount.unwrap_or(0.0), 2),
            category: row.category_text().to_string(),
            description: row.description_text().to_string(),
        })
        .collect::<Vec<TopTransaction>>();
    info!(selected = top.len(), "top transactions selected");
    top
}
