use std::path::PathBuf;

use clap::{Parser, Subcommand};
use spendsight_client::sink::DEFAULT_REPORT_FILE;

/// Shown after `spendsight report category --help`.
pub const REPORT_CATEGORY_AFTER_HELP: &str = "\
Ledger columns:
  The first row names the columns. Either spelling works:
    Дата операции   operation_date   (required for reports)
    Сумма операции  amount           negative = money spent
    Статус          status           OK rows count as spend
    Номер карты     card_number
    Категория       category         matched case-insensitively
    Описание        description

  Accepted formats: .csv (comma or semicolon), .json (array of objects),
  .xlsx, .xls, .xlsm, .xlsb, .ods (first sheet).

Window:
  The report covers the 90 days ending at --date, both ends included.
  Without --date the window ends today.

Output file:
  --output <path> also writes the matching rows as a JSON array.
  A bare --output writes them to default_report.json.
";

#[derive(Debug, Parser)]
#[command(
    name = "spendsight",
    version,
    about = "personal spending summaries from bank ledger exports",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Month-to-date card totals, top debits and market quotes
    Summary {
        /// Path to the ledger export
        ledger: String,
        /// Reference moment, `YYYY-MM-DD HH:MM:SS` (defaults to now)
        #[arg(long)]
        at: Option<String>,
        /// Settings file with `user_currencies` and `user_stocks`
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Skip currency and stock lookups
        #[arg(long)]
        offline: bool,
        /// Only keep top debits whose description or category contains this text
        #[arg(long)]
        search: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Find transactions by description or category
    Search {
        /// Text to look for, case-insensitive
        query: String,
        /// Path to a ledger export or a JSON array of records
        path: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Spending reports
    #[command(arg_required_else_help = true)]
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ReportCommand {
    /// Spending in one category over the trailing 90 days
    #[command(after_long_help = REPORT_CATEGORY_AFTER_HELP)]
    Category {
        /// Path to the ledger export
        ledger: String,
        /// Category name, case-insensitive
        category: String,
        /// Window end date, `YYYY-MM-DD` (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Also write the matching rows to this JSON file (bare flag: default_report.json)
        #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_REPORT_FILE)]
        output: Option<PathBuf>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::{Cli, Commands, ReportCommand, parse_from};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 8] = [
            vec!["spendsight", "summary", "ops.xlsx"],
            vec![
                "spendsight",
                "summary",
                "ops.xlsx",
                "--at",
                "2020-03-15 14:30:00",
            ],
            vec!["spendsight", "summary", "ops.csv", "--offline", "--json"],
            vec![
                "spendsight",
                "summary",
                "ops.csv",
                "--settings",
                "./user_settings.json",
                "--search",
                "Магнит",
            ],
            vec!["spendsight", "search", "еда", "records.json"],
            vec!["spendsight", "search", "еда", "ops.csv", "--json"],
            vec!["spendsight", "report", "category", "ops.xlsx", "Фастфуд"],
            vec![
                "spendsight",
                "report",
                "category",
                "ops.xlsx",
                "Фастфуд",
                "--date",
                "2021-10-20",
                "--output",
                "default_report.json",
                "--json",
            ],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
        }
    }

    #[test]
    fn parse_summary_flags() {
        let parsed = parse_from([
            "spendsight",
            "summary",
            "ops.csv",
            "--at",
            "2020-03-15 14:30:00",
            "--offline",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Summary {
                    offline: true,
                    json: false,
                    ..
                }
            ));
            if let Commands::Summary { at, .. } = cli.command {
                assert_eq!(at.as_deref(), Some("2020-03-15 14:30:00"));
            }
        }
    }

    #[test]
    fn parse_report_category() {
        let parsed = parse_from([
            "spendsight",
            "report",
            "category",
            "ops.csv",
            "Еда",
            "--date",
            "2023-09-30",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Report {
                    command: ReportCommand::Category { .. }
                }
            ));
        }
    }

    #[test]
    fn bare_output_flag_writes_to_the_default_report_file() {
        let cases = [
            (vec!["--output"], Some("default_report.json")),
            (vec!["--output", "--json"], Some("default_report.json")),
            (vec!["--output", "out/food.json"], Some("out/food.json")),
            (vec![], None),
        ];
        for (extra, expected) in cases {
            let mut args = vec!["spendsight", "report", "category", "ops.csv", "Еда"];
            args.extend(extra);
            let parsed = parse_from(args);
            assert!(parsed.is_ok());
            if let Ok(Cli {
                command:
                    Commands::Report {
                        command: ReportCommand::Category { output, .. },
                    },
            }) = parsed
            {
                assert_eq!(output.as_deref(), expected.map(std::path::Path::new));
            }
        }
    }

    #[test]
    fn report_without_subcommand_shows_help() {
        let parsed = parse_from(["spendsight", "report"]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(
                error.kind(),
                ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            );
        }
    }

    #[test]
    fn search_requires_query_and_path() {
        let parsed = parse_from(["spendsight", "search", "еда"]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
        }
    }
}
