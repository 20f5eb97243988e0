use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use tracing::info;

use crate::transactions::date::{
    format_timestamp, month_start, parse_reference_date, parse_reference_timestamp,
};
use crate::transactions::types::Transaction;
use crate::{ClientError, ClientResult};

pub const TRAILING_WINDOW_DAYS: i64 = 90;

/// Inclusive calendar-date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// `None` when `days` is negative or reaches past the representable calendar.
    pub fn trailing(end: NaiveDate, days: i64) -> Option<Self> {
        if days < 0 {
            return None;
        }
        let start = end.checked_sub_signed(Duration::try_days(days)?)?;
        Some(Self { start, end })
    }

    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        let date = timestamp.date();
        date >= self.start && date <= self.end
    }
}

/// Rows from the first moment of the reference month through `reference`, inclusive.
pub fn filter_month_to_date(
    transactions: &[Transaction],
    reference_timestamp: &str,
) -> ClientResult<Vec<Transaction>> {
    let reference = parse_reference_timestamp(reference_timestamp)?;
    Ok(month_to_date(transactions, reference))
}

pub fn month_to_date(transactions: &[Transaction], reference: NaiveDateTime) -> Vec<Transaction> {
    let start = month_start(reference);
    let filtered = transactions
        .iter()
        .filter(|transaction| {
            transaction
                .operation_date
                .is_some_and(|date| date >= start && date <= reference)
        })
        .cloned()
        .collect::<Vec<Transaction>>();
    info!(
        from = %format_timestamp(&start),
        to = %format_timestamp(&reference),
        kept = filtered.len(),
        total = transactions.len(),
        "month-to-date filter applied"
    );
    filtered
}

/// Rows dated within `days` days before `reference_date`, both ends inclusive.
/// A missing reference means today; a reference that does not parse is an error.
pub fn filter_trailing_window(
    transactions: &[Transaction],
    reference_date: Option<&str>,
    days: i64,
) -> ClientResult<Vec<Transaction>> {
    let window = resolve_trailing_window(reference_date, days)?;
    Ok(within(transactions, &window))
}

pub fn resolve_trailing_window(
    reference_date: Option<&str>,
    days: i64,
) -> ClientResult<DateWindow> {
    let end = match reference_date {
        Some(value) => parse_reference_date(value)?,
        None => Local::now().date_naive(),
    };
    DateWindow::trailing(end, days).ok_or_else(|| {
        ClientError::invalid_argument(&format!(
            "Trailing window of {days} days is out of range; use a non-negative day count \
             that stays within the supported calendar."
        ))
    })
}

pub fn within(transactions: &[Transaction], window: &DateWindow) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| {
            transaction
                .operation_date
                .as_ref()
                .is_some_and(|date| window.contains(date))
        })
        .cloned()
        .collect()
}
