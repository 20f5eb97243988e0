use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub user_currencies: Vec<String>,
    #[serde(default)]
    pub user_stocks: Vec<String>,
}

/// Reads the settings document. A missing or malformed file yields empty preferences.
pub fn load_preferences(path: &Path) -> UserPreferences {
    let body = match fs::read_to_string(path) {
        Ok(value) => value,
        Err(error) => {
            warn!(
                path = %path.display(),
                %error,
                "user settings not readable; using defaults"
            );
            return UserPreferences::default();
        }
    };

    match serde_json::from_str::<UserPreferences>(&body) {
        Ok(preferences) => {
            info!(
                path = %path.display(),
                currencies = preferences.user_currencies.len(),
                stocks = preferences.user_stocks.len(),
                "user settings loaded"
            );
            preferences
        }
        Err(error) => {
            warn!(
                path = %path.display(),
                %error,
                "user settings are not valid JSON; using defaults"
            );
            UserPreferences::default()
        }
    }
}
