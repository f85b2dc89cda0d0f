//! Canonical date keys.
//!
//! The host page renders dates in two textual shapes: a pre-normalized
//! `YYYY-MM-DD` attribute and a human-readable `"Month D, YYYY"` heading.
//! Every comparison and sort goes through the one canonical key produced
//! here; no other module parses date text.

use chrono::{Duration, NaiveDate};

const CANONICAL: &str = "%Y-%m-%d";
const LONG_FORM: &str = "%B %d, %Y";

/// Parse either accepted shape. Input matching neither yields `None`;
/// callers flag the record rather than abort.
pub fn parse(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, CANONICAL)
        .or_else(|_| NaiveDate::parse_from_str(raw, LONG_FORM))
        .ok()
}

/// The canonical comparison key, `YYYY-MM-DD`.
pub fn key(date: NaiveDate) -> String {
    date.format(CANONICAL).to_string()
}

pub fn canonical_key(raw: &str) -> Option<String> {
    parse(raw).map(key)
}

/// Day-view heading, e.g. `2024-06-10 (Monday)`.
pub fn day_heading(date: NaiveDate) -> String {
    format!("{} ({})", key(date), date.format("%A"))
}

/// Week-view range label covering anchor through anchor + 6 days.
pub fn week_range_label(anchor: NaiveDate) -> String {
    let end = anchor + Duration::days(6);
    format!("{} - {}", key(anchor), key(end))
}
