// src/normalize/workday.rs
//! Workday "bulleted" listings: records under a top-level `jobPostings`
//! array. The identifier field holds a list whose first element is the id,
//! and posting URLs are the endpoint's own host plus a relative
//! `externalPath`.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::opt_str;
use crate::dates;
use crate::posting::Posting;
use crate::registry::ProviderDescriptor;

pub fn extract(
    company: &str,
    desc: &ProviderDescriptor,
    data: &Value,
    now: DateTime<Utc>,
) -> Vec<Posting> {
    let records = match data.get("jobPostings").and_then(Value::as_array) {
        Some(r) => r,
        None => return Vec::new(),
    };

    let mut out = Vec::with_capacity(records.len());
    for record in records {
        let job_id = match record
            .get(&desc.id_field)
            .and_then(Value::as_array)
            .and_then(|list| list.first())
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
        {
            Some(id) => id.to_string(),
            None => continue, // sparse source data is expected
        };

        let url = desc.endpoint_host().map(|host| {
            let path = record
                .get("externalPath")
                .and_then(Value::as_str)
                .unwrap_or_default();
            format!("https://{host}{path}")
        });

        out.push(Posting {
            company: company.to_string(),
            job_id,
            title: opt_str(record, "title"),
            location: opt_str(record, "locationsText"),
            url,
            posted_date: dates::resolve(record.get(&desc.date_field), now),
        });
    }
    out
}
