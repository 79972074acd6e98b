// src/normalize/ashby.rs
//! Ashby "team" listings: a flat array whose records carry a `teamId`. Only
//! records matching the descriptor's target team are retained; that filter
//! has to run here because the team id does not survive into a `Posting`.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{coerce_id, opt_str};
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

    let mut out = Vec::new();
    for record in records {
        if let Some(target) = desc.team_id.as_deref() {
            if record.get("teamId").and_then(Value::as_str) != Some(target) {
                continue;
            }
        }

        let job_id = match record.get(&desc.id_field).and_then(coerce_id) {
            Some(id) => id,
            None => continue,
        };

        out.push(Posting {
            company: company.to_string(),
            job_id,
            title: opt_str(record, "title"),
            location: opt_str(record, "locationName"),
            url: None, // the source supplies no link field
            posted_date: dates::resolve(record.get(&desc.date_field), now),
        });
    }
    out
}
