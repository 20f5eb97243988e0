use std::path::Path;

use crate::ClientResult;
use crate::commands::load_normalized;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::sink::write_report;
use crate::transactions::category::spending_by_category;

#[derive(Debug, Default)]
pub struct CategoryReportOptions<'a> {
    pub ledger_path: String,
    pub category: String,
    pub date: Option<String>,
    pub output: Option<&'a Path>,
}

pub fn category(
    ledger_path: &str,
    category: &str,
    date: Option<&str>,
) -> ClientResult<SuccessEnvelope> {
    category_with_options(CategoryReportOptions {
        ledger_path: ledger_path.to_string(),
        category: category.to_string(),
        date: date.map(std::string::ToString::to_string),
        output: None,
    })
}

/// Builds the report, then writes it to `output` when one is given.
#[doc(hidden)]
pub fn category_with_options(options: CategoryReportOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let ledger = load_normalized(Path::new(&options.ledger_path))?;
    let report = spending_by_category(&ledger, &options.category, options.date.as_deref())?;

    if let Some(path) = options.output {
        write_report(path, &report)?;
    }

    let data = report.to_data(options.output.map(|path| path.display().to_string()));
    success("report category", data)
}
