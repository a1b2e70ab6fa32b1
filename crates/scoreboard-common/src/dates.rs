//! Date and timestamp rendering for the serialization boundary.
//!
//! Models keep `NaiveDate` / `NaiveDateTime` values; the `MM-DD-YYYY` strings
//! only exist once a row is turned into JSON or parsed from user input.
//! No timezone handling is performed.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};

/// Display format for a date of score.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// Display format for a match timestamp.
pub const DATETIME_FORMAT: &str = "%m-%d-%Y %H:%M:%S";

/// Render a date as `MM-DD-YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Render a timestamp as `MM-DD-YYYY HH:MM:SS`.
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}

/// Parse a `MM-DD-YYYY` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| Error::validation(format!("invalid date '{s}' (expected MM-DD-YYYY): {e}")))
}

/// Parse a `MM-DD-YYYY HH:MM:SS` timestamp.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), DATETIME_FORMAT).map_err(|e| {
        Error::validation(format!(
            "invalid timestamp '{s}' (expected MM-DD-YYYY HH:MM:SS): {e}"
        ))
    })
}

/// Serde serializer for `NaiveDate` fields rendered as `MM-DD-YYYY`.
///
/// Use with `#[serde(serialize_with = "scoreboard_common::dates::mdy_date::serialize")]`.
pub mod mdy_date {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }
}

/// Serde serializer for `NaiveDateTime` fields rendered as `MM-DD-YYYY HH:MM:SS`.
pub mod mdy_datetime {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(
        datetime: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_datetime(*datetime))
    }
}
