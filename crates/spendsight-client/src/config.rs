use std::path::{Path, PathBuf};

use crate::{ClientError, ClientResult};

pub const HOME_ENV: &str = "SPENDSIGHT_HOME";
pub const EXCHANGE_API_KEY_ENV: &str = "SPENDSIGHT_EXCHANGE_API_KEY";
pub const STOCKS_API_KEY_ENV: &str = "SPENDSIGHT_STOCKS_API_KEY";
pub const EXCHANGE_URL_ENV: &str = "SPENDSIGHT_EXCHANGE_URL";
pub const STOCKS_URL_ENV: &str = "SPENDSIGHT_STOCKS_URL";

pub const DEFAULT_EXCHANGE_URL: &str = "https://api.apilayer.com/exchangerates_data";
pub const DEFAULT_STOCKS_URL: &str = "https://www.alphavantage.co";
pub const SETTINGS_FILE_NAME: &str = "user_settings.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteEndpoints {
    pub exchange_url: String,
    pub exchange_api_key: Option<String>,
    pub stocks_url: String,
    pub stocks_api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub settings_path: PathBuf,
    pub quotes: QuoteEndpoints,
}

impl Config {
    /// Resolution order: explicit settings path, then `$SPENDSIGHT_HOME`, then `~/.spendsight`.
    pub fn resolve(
        settings_override: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ClientResult<Self> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let settings_path = match settings_override {
            Some(path) => absolutize(path)?,
            None => absolutize(&spendsight_home(non_empty(HOME_ENV))?)?.join(SETTINGS_FILE_NAME),
        };

        Ok(Self {
            settings_path,
            quotes: QuoteEndpoints {
                exchange_url: non_empty(EXCHANGE_URL_ENV)
                    .unwrap_or_else(|| DEFAULT_EXCHANGE_URL.to_string()),
                exchange_api_key: non_empty(EXCHANGE_API_KEY_ENV),
                stocks_url: non_empty(STOCKS_URL_ENV)
                    .unwrap_or_else(|| DEFAULT_STOCKS_URL.to_string()),
                stocks_api_key: non_empty(STOCKS_API_KEY_ENV),
            },
        })
    }
}

fn spendsight_home(from_env: Option<String>) -> ClientResult<PathBuf> {
    if let Some(value) = from_env {
        return Ok(PathBuf::from(value));
    }
    match home::home_dir() {
        Some(home_path) => Ok(home_path.join(".spendsight")),
        None => Err(ClientError::invalid_argument_with_recovery(
            "Could not resolve a home directory for user settings.",
            vec![format!(
                "Set `{HOME_ENV}` or pass --settings <path> explicitly."
            )],
        )),
    }
}

fn absolutize(path: &Path) -> ClientResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| {
            ClientError::invalid_argument(&format!(
                "Could not resolve `{}`: {error}",
                path.display()
            ))
        })
}
