//! Date helpers for the backend timestamp convention.
//!
//! Dialog date inputs produce `YYYY-MM-DD`. The backend expects UTC
//! ISO-8601 instants, with the lower bound at midnight and the upper bound
//! at the last second of the day. Because the format is fixed-width,
//! lexical comparison of two timestamps agrees with chronological order.

use chrono::{NaiveDate, Utc};

/// Input format of dialog date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const START_OF_DAY: &str = "T00:00:00Z";
const END_OF_DAY: &str = "T23:59:59Z";

/// Appends the start- or end-of-day time to a `YYYY-MM-DD` date.
pub fn to_backend_timestamp(date: &str, end_of_day: bool) -> String {
    let time = if end_of_day { END_OF_DAY } else { START_OF_DAY };
    format!("{date}{time}")
}

/// Today's date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// Returns `None` for anything else. chrono accepts padding spaces, signs
/// and missing zeros, so the input must also equal the canonical rendering
/// of the parsed date; otherwise it would break lexical ordering.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| format_date(*date) == raw)
}

/// Formats a date in the input format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Renders an ISO-8601 timestamp as `DD/MM/YYYY HH:MM`.
///
/// Returns an empty string for input too short to hold a date and time.
pub fn format_display(iso: &str) -> String {
    match (
        iso.get(0..4),
        iso.get(5..7),
        iso.get(8..10),
        iso.get(11..16),
    ) {
        (Some(year), Some(month), Some(day), Some(time)) => {
            format!("{day}/{month}/{year} {time}")
        }
        _ => String::new(),
    }
}
