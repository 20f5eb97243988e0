use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{ClientError, ClientResult};

pub const REFERENCE_TIMESTAMP_LABEL: &str = "YYYY-MM-DD HH:MM:SS";
pub const REFERENCE_DATE_LABEL: &str = "YYYY-MM-DD";

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%d.%m.%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d.%m.%Y %H:%M",
];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];

/// Parses a ledger cell. Returns `None` rather than guessing when no known format matches.
pub fn parse_operation_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(parsed.and_time(NaiveTime::MIN));
        }
    }
    None
}

pub fn parse_reference_timestamp(value: &str) -> ClientResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%d %H:%M:%S")
        .map_err(|_| ClientError::malformed_reference_date(value, REFERENCE_TIMESTAMP_LABEL))
}

pub fn parse_reference_date(value: &str) -> ClientResult<NaiveDate> {
    let trimmed = value.trim();
    if !looks_like_iso_date(trimmed) {
        return Err(ClientError::malformed_reference_date(
            value,
            REFERENCE_DATE_LABEL,
        ));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ClientError::malformed_reference_date(value, REFERENCE_DATE_LABEL))
}

pub fn month_start(reference: NaiveDateTime) -> NaiveDateTime {
    let first = reference.date().with_day(1).unwrap_or(reference.date());
    first.and_time(NaiveTime::MIN)
}

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn format_day_month_year(value: &NaiveDateTime) -> String {
    value.format("%d.%m.%Y").to_string()
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}
