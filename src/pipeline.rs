// src/pipeline.rs
//! One batch run: fetch every selected provider concurrently, normalize each
//! response as it lands, reassemble results in registry order, then run the
//! sequential relevance filter against one shared ledger snapshot.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::fetch::Fetch;
use crate::filter::{filter_postings, FilterConfig, FilterStats};
use crate::ledger::SeenLedger;
use crate::normalize;
use crate::posting::Posting;
use crate::registry::Registry;

#[derive(Debug)]
pub struct RunOutcome {
    /// Postings surviving every filter stage, in source order.
    pub postings: Vec<Posting>,
    pub stats: FilterStats,
    /// Providers whose fetch failed this run; they contribute zero postings
    /// and never abort the run.
    pub provider_errors: usize,
}

/// Fetch + normalize + filter once. Fails only on configuration errors
/// discovered before any fetch begins.
pub async fn run_once<F: Fetch + 'static>(
    fetcher: Arc<F>,
    registry: &Registry,
    ledger: &SeenLedger,
    cfg: &FilterConfig,
    now: DateTime<Utc>,
) -> Result<RunOutcome> {
    if registry.is_empty() {
        return Err(anyhow!("no providers configured"));
    }

    let mut tasks = JoinSet::new();
    for (index, (company, desc)) in registry.iter().enumerate() {
        let fetcher = Arc::clone(&fetcher);
        let company = company.to_string();
        let desc = desc.clone();
        tasks.spawn(async move {
            match fetcher.fetch(&desc).await {
                Ok(data) => {
                    let postings = normalize::normalize(&company, &desc, &data, now);
                    info!(company = %company, count = postings.len(), "normalized postings");
                    (index, Some(postings))
                }
                Err(e) => {
                    warn!(company = %company, error = %format!("{e:#}"), "provider fetch failed");
                    (index, None)
                }
            }
        });
    }

    // Reassemble in registry order so output is stable across runs.
    let mut slots: Vec<Option<Vec<Posting>>> = vec![None; registry.len()];
    let mut provider_errors = 0usize;
    while let Some(joined) = tasks.join_next().await {
        let (index, result) = joined.map_err(|e| anyhow!("fetch task panicked: {e}"))?;
        match result {
            Some(postings) => slots[index] = Some(postings),
            None => provider_errors += 1,
        }
    }

    let all: Vec<Posting> = slots.into_iter().flatten().flatten().collect();
    let (postings, stats) = filter_postings(all, ledger, cfg, now);

    Ok(RunOutcome {
        postings,
        stats,
        provider_errors,
    })
}
