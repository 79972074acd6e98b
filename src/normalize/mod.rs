// src/normalize/mod.rs
//! Response normalizer: one extractor per known board format, dispatched
//! through a single exhaustive match. Each extractor turns raw JSON job
//! records into canonical [`Posting`]s; records without a usable identifier
//! are dropped here and never reach the filter.

pub mod ashby;
pub mod greenhouse;
pub mod lever;
pub mod workday;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::posting::Posting;
use crate::registry::{ParserKind, ProviderDescriptor};

pub fn normalize(
    company: &str,
    desc: &ProviderDescriptor,
    data: &Value,
    now: DateTime<Utc>,
) -> Vec<Posting> {
    match desc.parser {
        ParserKind::Workday => workday::extract(company, desc, data, now),
        ParserKind::Greenhouse => greenhouse::extract(company, desc, data, now),
        ParserKind::Lever => lever::extract(company, desc, data, now),
        ParserKind::Ashby => ashby::extract(company, desc, data, now),
    }
}

/// Non-empty string field on a record.
fn opt_str(record: &Value, field: &str) -> Option<String> {
    match record.get(field)?.as_str() {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => None,
    }
}

/// Scalar identifier coerced to a string; numbers are allowed (Greenhouse
/// ids are numeric), empty strings are not.
fn coerce_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Walk a dotted path ("location.name") through nested objects.
fn nested_str(record: &Value, path: &str) -> Option<String> {
    let mut cur = record;
    for key in path.split('.') {
        cur = cur.get(key)?;
    }
    match cur.as_str() {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => None,
    }
}
