use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerWarning {
    pub row: i64,
    pub field: String,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSummary {
    pub last_digits: String,
    pub total_spent: f64,
    pub cashback: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopTransaction {
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyRate {
    pub currency: String,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockPrice {
    pub stock: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub greeting: String,
    pub cards: Vec<CardSummary>,
    pub top_transactions: Vec<TopTransaction>,
    pub currency_rates: Vec<CurrencyRate>,
    pub stock_prices: Vec<StockPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchData<TopTransaction>>,
}

/// Plain serialisable view of one ledger row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub row: i64,
    pub operation_date: Option<String>,
    pub amount: Option<f64>,
    pub status: String,
    pub card_number: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReportData {
    pub category: String,
    pub from: String,
    pub to: String,
    pub rows: Vec<TransactionRecord>,
    pub warnings: Vec<LedgerWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchData<T: Serialize> {
    pub query: String,
    pub total: usize,
    pub rows: Vec<T>,
}

pub type JsonSearchData = SearchData<Value>;
