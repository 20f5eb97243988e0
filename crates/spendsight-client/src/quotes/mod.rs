//! Market quotes for the summary: currency rates against the rouble and
//! stock prices. Sources never fail the caller; a symbol that cannot be
//! quoted is left out of the result.

pub mod http;

use crate::contracts::types::{CurrencyRate, StockPrice};

pub use http::HttpQuoteSource;

pub trait QuoteSource {
    fn currency_rates(&self, currencies: &[String]) -> Vec<CurrencyRate>;
    fn stock_prices(&self, symbols: &[String]) -> Vec<StockPrice>;
}

/// Used with `--offline` and whenever no HTTP client can be built.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineQuoteSource;

impl QuoteSource for OfflineQuoteSource {
    fn currency_rates(&self, _currencies: &[String]) -> Vec<CurrencyRate> {
        Vec::new()
    }

    fn stock_prices(&self, _symbols: &[String]) -> Vec<StockPrice> {
        Vec::new()
    }
}
