use chrono::Timelike;
use tracing::warn;

use crate::transactions::date::parse_reference_timestamp;

pub const FALLBACK_GREETING: &str = "Добрый день";

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=5 => "Доброй ночи",
        6..=11 => "Доброе утро",
        12..=17 => "Добрый день",
        _ => "Добрый вечер",
    }
}

/// Greeting for a `YYYY-MM-DD HH:MM:SS` timestamp, or the daytime greeting if it does not parse.
pub fn greeting_for(timestamp: &str) -> &'static str {
    match parse_reference_timestamp(timestamp) {
        Ok(parsed) => greeting(parsed.hour()),
        Err(_) => {
            warn!(timestamp, "unparsable timestamp for greeting");
            FALLBACK_GREETING
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{greeting, greeting_for};

    #[test]
    fn hour_boundaries() {
        assert_eq!(greeting(0), "Доброй ночи");
        assert_eq!(greeting(5), "Доброй ночи");
        assert_eq!(greeting(6), "Доброе утро");
        assert_eq!(greeting(11), "Доброе утро");
        assert_eq!(greeting(12), "Добрый день");
        assert_eq!(greeting(17), "Добрый день");
        assert_eq!(greeting(18), "Добрый вечер");
        assert_eq!(greeting(23), "Добрый вечер");
    }

    #[test]
    fn bad_timestamp_falls_back() {
        assert_eq!(greeting_for("2020-03-15 21:00:00"), "Добрый вечер");
        assert_eq!(greeting_for("not a time"), "Добрый день");
    }
}
