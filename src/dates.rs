// src/dates.rs
//! Date resolver: job boards encode posting dates as epoch numbers, absolute
//! strings, or relative phrases ("Posted 3 Days ago"). Each strategy returns
//! `None` on no-match so the chain short-circuits without error control flow.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::OnceCell;
use regex::Regex;
use serde_json::Value;

/// Epoch values above this magnitude are taken as milliseconds.
const MILLISECOND_THRESHOLD: f64 = 1e12;
const MILLISECONDS_PER_SECOND: f64 = 1000.0;

/// Resolve an arbitrary raw date value into an absolute UTC timestamp.
/// Resolution order, first match wins: numeric epoch, absolute string,
/// relative phrase. Anything else is unresolved (`None`).
pub fn resolve(value: Option<&Value>, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let value = value?;

    if let Some(ts) = parse_epoch(value) {
        return Some(ts);
    }

    if let Some(s) = value.as_str() {
        return parse_absolute(s).or_else(|| parse_relative(s, now));
    }

    None
}

/// Numeric epoch, as a JSON number or a numeric string. Millisecond-scale
/// values are normalized to seconds first. Out-of-range values resolve to
/// `None`, not an error.
fn parse_epoch(value: &Value) -> Option<DateTime<Utc>> {
    let mut ts = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !ts.is_finite() {
        return None;
    }
    if ts.abs() > MILLISECOND_THRESHOLD {
        ts /= MILLISECONDS_PER_SECOND;
    }
    let secs = ts.trunc() as i64;
    let nanos = (ts.fract().abs() * 1e9) as u32;
    DateTime::<Utc>::from_timestamp(secs, nanos)
}

/// Absolute date/time string: RFC 3339 (trailing "Z" treated as UTC), then
/// a naive datetime or bare date, both taken as UTC.
fn parse_absolute(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Relative phrases: "today", "yesterday", or "[Posted] <N>[+] day(s) ago",
/// all case-insensitive. The "+" on the number is ignored.
fn parse_relative(s: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let lower = s.to_lowercase();
    if lower.contains("today") {
        return Some(now);
    }
    if lower.contains("yesterday") {
        return now.checked_sub_days(Days::new(1));
    }

    static RE_DAYS_AGO: OnceCell<Regex> = OnceCell::new();
    let re = RE_DAYS_AGO.get_or_init(|| Regex::new(r"(\d+)\+?\s+days?\s+ago").unwrap());
    let caps = re.captures(&lower)?;
    let days: u64 = caps[1].parse().ok()?;
    now.checked_sub_days(Days::new(days))
}
