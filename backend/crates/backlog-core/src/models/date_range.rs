use crate::CoreResult;
use crate::dates::{format_request_date, month_bounds, parse_request_date};

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

/// Creation-date window for a backlog query.
///
/// Either bound may be absent. No ordering is enforced between them; an
/// inverted range simply matches nothing upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Parse explicit `YYYY-MM-DD` bounds supplied by a caller.
    #[track_caller]
    pub fn parse(start: Option<&str>, end: Option<&str>) -> CoreResult<Self> {
        let start = start
            .map(|s| parse_request_date(s, "start_date"))
            .transpose()?;
        let end = end.map(|e| parse_request_date(e, "end_date")).transpose()?;

        Ok(Self { start, end })
    }

    /// Whole calendar month, first day through last day inclusive.
    #[track_caller]
    pub fn for_month(year: i32, month: u32) -> CoreResult<Self> {
        let (first, last) = month_bounds(year, month)?;
        Ok(Self::new(Some(first), Some(last)))
    }

    /// Month containing today's date (UTC).
    pub fn current_month() -> CoreResult<Self> {
        let today = Utc::now().date_naive();
        Self::for_month(today.year(), today.month())
    }

    pub fn start_str(&self) -> Option<String> {
        self.start.map(format_request_date)
    }

    pub fn end_str(&self) -> Option<String> {
        self.end.map(format_request_date)
    }
}
