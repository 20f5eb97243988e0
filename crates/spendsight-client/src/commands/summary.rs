use std::path::Path;

use chrono::{NaiveDateTime, Timelike};
use tracing::{error, warn};

use crate::ClientResult;
use crate::commands::load_normalized;
use crate::config::{Config, HOME_ENV};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{SearchData, SummaryData, TopTransaction};
use crate::greeting::greeting;
use crate::preferences::{UserPreferences, load_preferences};
use crate::quotes::{HttpQuoteSource, OfflineQuoteSource, QuoteSource};
use crate::transactions::cards::aggregate_by_card;
use crate::transactions::date::parse_reference_timestamp;
use crate::transactions::search::search;
use crate::transactions::top::{DEFAULT_TOP_COUNT, top_transactions};
use crate::transactions::types::Ledger;
use crate::transactions::window::month_to_date;

#[derive(Debug, Default)]
pub struct SummaryRunOptions<'a> {
    pub ledger_path: String,
    pub at: String,
    pub settings_path: Option<&'a Path>,
    pub offline: bool,
    pub search: Option<String>,
    pub home_override: Option<&'a Path>,
}

pub fn run(ledger_path: &str, at: &str) -> ClientResult<SuccessEnvelope> {
    run_with_options(SummaryRunOptions {
        ledger_path: ledger_path.to_string(),
        at: at.to_string(),
        ..SummaryRunOptions::default()
    })
}

#[doc(hidden)]
pub fn run_with_options(options: SummaryRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let reference = parse_reference_timestamp(&options.at)?;
    let config = resolve_config(options.settings_path, options.home_override)?;
    let ledger = load_normalized(Path::new(&options.ledger_path))?;
    let preferences = load_preferences(&config.settings_path);

    let data = if options.offline {
        compose_summary(
            &ledger,
            &preferences,
            reference,
            &OfflineQuoteSource,
            options.search.as_deref(),
        )
    } else {
        match HttpQuoteSource::new(config.quotes) {
            Ok(source) => compose_summary(
                &ledger,
                &preferences,
                reference,
                &source,
                options.search.as_deref(),
            ),
            Err(err) => {
                error!(error = %err, "could not build HTTP client; quotes skipped");
                compose_summary(
                    &ledger,
                    &preferences,
                    reference,
                    &OfflineQuoteSource,
                    options.search.as_deref(),
                )
            }
        }
    };

    success("summary", data)
}

/// Greeting, month-to-date card totals and top debits, plus quotes for the
/// configured symbols. `search` narrows the top list when given.
pub fn compose_summary(
    ledger: &Ledger,
    preferences: &UserPreferences,
    reference: NaiveDateTime,
    quotes: &dyn QuoteSource,
    search_query: Option<&str>,
) -> SummaryData {
    let month = month_to_date(&ledger.transactions, reference);
    let cards = aggregate_by_card(&month);
    let top = top_transactions(&month, DEFAULT_TOP_COUNT);
    let currency_rates = quotes.currency_rates(&preferences.user_currencies);
    let stock_prices = quotes.stock_prices(&preferences.user_stocks);

    if cards.is_empty() {
        warn!("no card spending in the current month");
    }
    if top.is_empty() {
        warn!("no debits in the current month");
    }
    if currency_rates.is_empty() && !preferences.user_currencies.is_empty() {
        warn!("no currency rates available");
    }
    if stock_prices.is_empty() && !preferences.user_stocks.is_empty() {
        warn!("no stock prices available");
    }

    let search_section = search_query.map(|query| {
        let rows = search(query, &top);
        SearchData::<TopTransaction> {
            query: query.to_string(),
            total: rows.len(),
            rows,
        }
    });

    SummaryData {
        greeting: greeting(reference.hour()).to_string(),
        cards,
        top_transactions: top,
        currency_rates,
        stock_prices,
        search: search_section,
    }
}

fn resolve_config(
    settings_path: Option<&Path>,
    home_override: Option<&Path>,
) -> ClientResult<Config> {
    let home = home_override.map(|path| path.display().to_string());
    Config::resolve(settings_path, |name| {
        if name == HOME_ENV
            && let Some(value) = &home
        {
            return Some(value.clone());
        }
        std::env::var(name).ok()
    })
}
