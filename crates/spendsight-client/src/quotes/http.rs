use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::config::QuoteEndpoints;
use crate::contracts::types::{CurrencyRate, StockPrice};
use crate::quotes::QuoteSource;
use crate::transactions::round_to;

const USER_AGENT: &str = concat!("spendsight/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 15;
const QUOTE_CURRENCY: &str = "RUB";

/// Exchange-rates and Alpha Vantage lookups, one blocking request per symbol.
pub struct HttpQuoteSource {
    http: reqwest::blocking::Client,
    endpoints: QuoteEndpoints,
}

impl HttpQuoteSource {
    pub fn new(endpoints: QuoteEndpoints) -> Result<Self, reqwest::Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, endpoints })
    }

    fn get_json(
        &self,
        request: reqwest::blocking::RequestBuilder,
        symbol: &str,
    ) -> Option<Value> {
        let response = match request.send() {
            Ok(value) => value,
            Err(err) => {
                error!(symbol, error = %err, "quote request failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!(
                symbol,
                status = status.as_u16(),
                "quote provider returned an error status"
            );
            return None;
        }

        match response.json::<Value>() {
            Ok(body) => Some(body),
            Err(err) => {
                error!(symbol, error = %err, "quote response is not JSON");
                None
            }
        }
    }

    fn currency_rate(&self, currency: &str, api_key: &str) -> Option<CurrencyRate> {
        let url = format!("{}/latest", self.endpoints.exchange_url.trim_end_matches('/'));
        let request = self
            .http
            .get(url)
            .query(&[("base", currency), ("symbols", QUOTE_CURRENCY)])
            .header("apikey", api_key);
        let body = self.get_json(request, currency)?;
        match rate_from_body(&body) {
            Some(rate) => Some(CurrencyRate {
                currency: currency.to_string(),
                rate,
            }),
            None => {
                error!(currency, "exchange-rate response has no RUB rate");
                None
            }
        }
    }

    fn stock_price(&self, symbol: &str, api_key: &str) -> Option<StockPrice> {
        let url = format!("{}/query", self.endpoints.stocks_url.trim_end_matches('/'));
        let request = self.http.get(url).query(&[
            ("function", "GLOBAL_QUOTE"),
            ("symbol", symbol),
            ("apikey", api_key),
        ]);
        let body = self.get_json(request, symbol)?;
        match price_from_body(&body) {
            Some(price) => Some(StockPrice {
                stock: symbol.to_string(),
                price,
            }),
            None => {
                error!(symbol, "stock quote response has no price");
                None
            }
        }
    }
}

impl QuoteSource for HttpQuoteSource {
    fn currency_rates(&self, currencies: &[String]) -> Vec<CurrencyRate> {
        if currencies.is_empty() {
            return Vec::new();
        }
        let Some(api_key) = self.endpoints.exchange_api_key.as_deref() else {
            warn!("no exchange-rate API key configured; skipping currency rates");
            return Vec::new();
        };

        let rates = currencies
            .iter()
            .filter_map(|currency| self.currency_rate(currency, api_key))
            .collect::<Vec<CurrencyRate>>();
        debug!(
            requested = currencies.len(),
            quoted = rates.len(),
            "currency rates fetched"
        );
        rates
    }

    fn stock_prices(&self, symbols: &[String]) -> Vec<StockPrice> {
        if symbols.is_empty() {
            return Vec::new();
        }
        let Some(api_key) = self.endpoints.stocks_api_key.as_deref() else {
            warn!("no stock quote API key configured; skipping stock prices");
            return Vec::new();
        };

        let prices = symbols
            .iter()
            .filter_map(|symbol| self.stock_price(symbol, api_key))
            .collect::<Vec<StockPrice>>();
        debug!(
            requested = symbols.len(),
            quoted = prices.len(),
            "stock prices fetched"
        );
        prices
    }
}

/// `rates.RUB` from an exchange-rates `latest` response.
pub(crate) fn rate_from_body(body: &Value) -> Option<f64> {
    body.get("rates")
        .and_then(|rates| rates.get(QUOTE_CURRENCY))
        .and_then(number_or_numeric_string)
        .map(|rate| round_to(rate, 2))
}

/// `"Global Quote"."05. price"` from an Alpha Vantage response. The price arrives as a string.
pub(crate) fn price_from_body(body: &Value) -> Option<f64> {
    body.get("Global Quote")
        .and_then(|quote| quote.get("05. price"))
        .and_then(number_or_numeric_string)
        .map(|price| round_to(price, 2))
}

fn number_or_numeric_string(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}
