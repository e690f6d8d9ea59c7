use crate::DateRange;

use chrono::{Datelike, Utc};

#[test]
fn test_parse_both_bounds() {
    let range = DateRange::parse(Some("2024-01-01"), Some("2024-01-31")).unwrap();

    assert_eq!(range.start_str().as_deref(), Some("2024-01-01"));
    assert_eq!(range.end_str().as_deref(), Some("2024-01-31"));
}

#[test]
fn test_parse_single_bound() {
    let range = DateRange::parse(None, Some("2024-01-31")).unwrap();

    assert_eq!(range.start, None);
    assert_eq!(range.end_str().as_deref(), Some("2024-01-31"));
}

#[test]
fn test_parse_inverted_range_is_accepted() {
    let range = DateRange::parse(Some("2024-12-31"), Some("2024-01-01")).unwrap();
    assert!(range.start > range.end);
}

#[test]
fn test_parse_malformed_end_date() {
    assert!(DateRange::parse(Some("2024-01-01"), Some("2024-02-31")).is_err());
}

#[test]
fn test_for_month_leap_year() {
    let range = DateRange::for_month(2024, 2).unwrap();

    assert_eq!(range.start_str().as_deref(), Some("2024-02-01"));
    assert_eq!(range.end_str().as_deref(), Some("2024-02-29"));
}

#[test]
fn test_current_month_contains_today() {
    let today = Utc::now().date_naive();
    let range = DateRange::current_month().unwrap();

    assert_eq!(range.start.unwrap().day(), 1);
    assert_eq!(range.start.unwrap().month(), today.month());
    assert!(range.end.unwrap() >= today);
}
