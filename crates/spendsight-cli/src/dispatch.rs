use chrono::Local;
use spendsight_client::commands;
use spendsight_client::commands::report::CategoryReportOptions;
use spendsight_client::commands::summary::SummaryRunOptions;
use spendsight_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, ReportCommand};

const REFERENCE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Summary {
            ledger,
            at,
            settings,
            offline,
            search,
            json: _,
        } => commands::summary::run_with_options(SummaryRunOptions {
            ledger_path: ledger.clone(),
            at: at.clone().unwrap_or_else(now_timestamp),
            settings_path: settings.as_deref(),
            offline: *offline,
            search: search.clone(),
            home_override: None,
        }),
        Commands::Search { query, path, .. } => commands::search::run(query, path),
        Commands::Report { command } => match command {
            ReportCommand::Category {
                ledger,
                category,
                date,
                output,
                json: _,
            } => commands::report::category_with_options(CategoryReportOptions {
                ledger_path: ledger.clone(),
                category: category.clone(),
                date: date.clone(),
                output: output.as_deref(),
            }),
        },
    }
}

fn now_timestamp() -> String {
    Local::now().format(REFERENCE_TIMESTAMP_FORMAT).to_string()
}
