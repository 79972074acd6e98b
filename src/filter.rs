// src/filter.rs
//! Relevance filter: seen-before, title exclusion, location keywords, then
//! freshness, applied in that order to every normalized posting. A pass over
//! the filter never mutates the ledger, so re-running it against the same
//! snapshot is side-effect-free.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ledger::SeenLedger;
use crate::posting::Posting;

pub const ENV_FILTER_PATH: &str = "JOB_RADAR_FILTER_PATH";
pub const DEFAULT_FILTER_PATH: &str = "config/filter.toml";

/// Title terms that disqualify a posting, matched as uppercase substrings.
const DEFAULT_EXCLUDE_TITLE_TERMS: &[&str] = &[
    "STAFF",
    "SENIOR",
    "MANAGER",
    "MOBILE",
    "MACHINE LEARNING",
    "MLOPS",
    "DEVOPS",
];

const DEFAULT_INCLUDE_LOCATIONS: &[&str] = &["REMOTE", "CANADA", "VANCOUVER", "BRITISH COLUMBIA"];
const DEFAULT_EXCLUDE_LOCATIONS: &[&str] = &["US ONLY", "HYBRID"];

const DEFAULT_MAX_AGE_DAYS: i64 = 25;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Uppercased before matching; substring semantics, not whole-word.
    pub exclude_title_terms: Vec<String>,
    pub include_locations: Vec<String>,
    pub exclude_locations: Vec<String>,
    pub max_age_days: i64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        let owned = |v: &[&str]| v.iter().map(|s| s.to_string()).collect();
        Self {
            exclude_title_terms: owned(DEFAULT_EXCLUDE_TITLE_TERMS),
            include_locations: owned(DEFAULT_INCLUDE_LOCATIONS),
            exclude_locations: owned(DEFAULT_EXCLUDE_LOCATIONS),
            max_age_days: DEFAULT_MAX_AGE_DAYS,
        }
    }
}

impl FilterConfig {
    /// Load from env path / config/filter.toml, falling back to builtin
    /// defaults when neither exists.
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_FILTER_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_FILTER_PATH} points to non-existent path"));
            }
            return Self::from_path(&pb);
        }
        let default = Path::new(DEFAULT_FILTER_PATH);
        if default.exists() {
            return Self::from_path(default);
        }
        Ok(Self::default())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading filter config from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing filter config at {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut cfg: FilterConfig = toml::from_str(s)?;
        // Matching is uppercase-substring; normalize the keyword sets once.
        for list in [
            &mut cfg.exclude_title_terms,
            &mut cfg.include_locations,
            &mut cfg.exclude_locations,
        ] {
            for term in list.iter_mut() {
                *term = term.trim().to_uppercase();
            }
            list.retain(|t| !t.is_empty());
        }
        Ok(cfg)
    }
}

/// Per-stage rejection counts for the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub input: usize,
    pub seen: usize,
    pub title: usize,
    pub location: usize,
    pub stale: usize,
    pub kept: usize,
}

/// Apply every stage to every posting, in source order. The ledger is only
/// consulted, never written.
pub fn filter_postings(
    postings: Vec<Posting>,
    ledger: &SeenLedger,
    cfg: &FilterConfig,
    now: DateTime<Utc>,
) -> (Vec<Posting>, FilterStats) {
    let mut stats = FilterStats {
        input: postings.len(),
        ..Default::default()
    };

    let mut kept = Vec::with_capacity(postings.len());
    for posting in postings {
        if ledger.contains(&posting.company, &posting.job_id) {
            stats.seen += 1;
            continue;
        }
        if is_title_excluded(posting.title.as_deref(), cfg) {
            stats.title += 1;
            continue;
        }
        if !is_location_wanted(posting.location.as_deref(), cfg) {
            stats.location += 1;
            continue;
        }
        if is_stale(posting.posted_date, cfg, now) {
            stats.stale += 1;
            continue;
        }
        kept.push(posting);
    }

    stats.kept = kept.len();
    (kept, stats)
}

/// An absent or empty title is never excluded.
fn is_title_excluded(title: Option<&str>, cfg: &FilterConfig) -> bool {
    let title = match title {
        Some(t) if !t.is_empty() => t.to_uppercase(),
        _ => return false,
    };
    cfg.exclude_title_terms.iter().any(|term| title.contains(term))
}

/// The location must contain at least one inclusion keyword and none of the
/// exclusion keywords, all as uppercase substrings.
fn is_location_wanted(location: Option<&str>, cfg: &FilterConfig) -> bool {
    let location = location.unwrap_or_default().to_uppercase();
    let included = cfg.include_locations.iter().any(|kw| location.contains(kw));
    let excluded = cfg.exclude_locations.iter().any(|kw| location.contains(kw));
    included && !excluded
}

/// Absence of a posting date is not evidence of staleness.
fn is_stale(posted: Option<DateTime<Utc>>, cfg: &FilterConfig, now: DateTime<Utc>) -> bool {
    match posted {
        Some(date) => (now - date).num_days() > cfg.max_age_days,
        None => false,
    }
}
