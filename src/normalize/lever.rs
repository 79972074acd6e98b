// src/normalize/lever.rs
//! Lever "posting" listings: a flat top-level array of records (no wrapper
//! object). Title lives in `text` and location under `categories.location`.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{coerce_id, nested_str, opt_str};
use crate::dates;
use crate::posting::Posting;
use crate::registry::ProviderDescriptor;

pub fn extract(
    company: &str,
    desc: &ProviderDescriptor,
    data: &Value,
    now: DateTime<Utc>,
) -> Vec<Posting> {
    let records = match data.as_array() {
        Some(r) => r,
        None => return Vec::new(),
    };

    let mut out = Vec::with_capacity(records.len());
    for record in records {
        let job_id = match record.get(&desc.id_field).and_then(coerce_id) {
            Some(id) => id,
            None => continue,
        };

        out.push(Posting {
            company: company.to_string(),
            job_id,
            title: opt_str(record, "text"),
            url: opt_str(record, "applyUrl"),
            location: nested_str(record, "categories.location"),
            posted_date: dates::resolve(record.get(&desc.date_field), now),
        });
    }
    out
}
