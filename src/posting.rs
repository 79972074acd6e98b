// src/posting.rs
use chrono::{DateTime, Utc};

pub const NO_TITLE_SENTINEL: &str = "No Title Provided";
pub const NO_LOCATION_SENTINEL: &str = "N/A";

/// Canonical representation of one job listing, regardless of which
/// board format it came from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Posting {
    pub company: String,
    /// Stable identity within `company`; never empty after normalization.
    pub job_id: String,
    pub title: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    /// Absent when the source gave no parseable date. Absence is a distinct
    /// state from "too old" and never counts against freshness.
    pub posted_date: Option<DateTime<Utc>>,
}

impl Posting {
    pub fn title_display(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => NO_TITLE_SENTINEL,
        }
    }

    pub fn location_display(&self) -> &str {
        match self.location.as_deref() {
            Some(l) if !l.is_empty() => l,
            _ => NO_LOCATION_SENTINEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_falls_back_to_sentinels() {
        let p = Posting {
            company: "acme".into(),
            job_id: "1".into(),
            title: None,
            location: Some(String::new()),
            url: None,
            posted_date: None,
        };
        assert_eq!(p.title_display(), NO_TITLE_SENTINEL);
        assert_eq!(p.location_display(), NO_LOCATION_SENTINEL);
    }
}
