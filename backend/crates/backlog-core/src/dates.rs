//! Calendar helpers shared by request validation and item normalization.

use crate::{CoreError, CoreResult};

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime};

/// Wire format for dates accepted from callers and sent to the remote query.
pub const REQUEST_DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format for dates on normalized items.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// ISO-8601 timestamp layouts tried after RFC 3339: offsets without a colon,
/// minute precision and the compact basic format.
const OFFSET_TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%#z",
];

/// Parse a caller-supplied `YYYY-MM-DD` date.
#[track_caller]
pub fn parse_request_date(value: &str, field: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), REQUEST_DATE_FORMAT).map_err(|_| {
        CoreError::validation(
            format!("Invalid date format '{value}' for {field}. Use YYYY-MM-DD"),
            Some(field),
        )
    })
}

pub fn format_request_date(date: NaiveDate) -> String {
    date.format(REQUEST_DATE_FORMAT).to_string()
}

/// First and last calendar day of a month.
#[track_caller]
pub fn month_bounds(year: i32, month: u32) -> CoreResult<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(CoreError::validation(
            format!("Invalid month {month}: must be between 1 and 12"),
            Some("month"),
        ));
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        CoreError::validation(format!("Invalid year {year}"), Some("year"))
    })?;

    // First day of the following month, minus one day
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| CoreError::validation(format!("Invalid year {year}"), Some("year")))?;

    debug_assert_eq!(last.month(), month);
    Ok((first, last))
}

/// Reformat an ISO-8601 timestamp as `DD/MM/YYYY`.
///
/// Absent, empty, or unparsable input yields `None`. Timestamps keep the
/// calendar date of their own offset; no timezone conversion happens.
pub fn format_display_date(value: Option<&str>) -> Option<String> {
    let raw = value.map(str::trim).filter(|v| !v.is_empty())?;

    let with_offset = DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        OFFSET_TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(raw, format).ok())
    });

    let date = match with_offset {
        Some(dt) => dt.date_naive(),
        None => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|dt| dt.date())
            .or_else(|_| NaiveDate::parse_from_str(raw, REQUEST_DATE_FORMAT))
            .ok()?,
    };

    Some(date.format(DISPLAY_DATE_FORMAT).to_string())
}
