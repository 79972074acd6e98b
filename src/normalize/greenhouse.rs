// src/normalize/greenhouse.rs
//! Greenhouse "board" listings: records under a top-level `jobs` array, a
//! scalar id (numeric for some boards), location nested at `location.name`,
//! and an `absolute_url` supplied directly. Location relevance for these
//! large multi-region result sets is applied uniformly by the filter stage.

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
    let records = match data.get("jobs").and_then(Value::as_array) {
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
            title: opt_str(record, "title"),
            location: nested_str(record, "location.name"),
            url: opt_str(record, "absolute_url"),
            posted_date: dates::resolve(record.get(&desc.date_field), now),
        });
    }
    out
}
