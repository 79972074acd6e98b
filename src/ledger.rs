// src/ledger.rs
//! Seen-jobs ledger: the durable record of `(company, job_id)` pairs already
//! surfaced to the user. Loaded once at startup, mutated only by explicit
//! `mark_seen`, written back only by explicit `save` — the filter pass never
//! touches storage.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_LEDGER_PATH: &str = "applied_jobs.json";
pub const ENV_LEDGER_PATH: &str = "JOB_RADAR_LEDGER_PATH";

/// On-disk shape: JSON object mapping company key → list of job ids.
type LedgerFile = BTreeMap<String, Vec<String>>;

#[derive(Debug, Default)]
pub struct SeenLedger {
    path: Option<PathBuf>,
    seen: BTreeMap<String, BTreeSet<String>>,
}

impl SeenLedger {
    /// Read the ledger from durable storage. A missing file is an empty
    /// ledger, not an error; a corrupt file is logged and degrades to an
    /// empty ledger, never a fatal failure.
    pub fn load(path: &Path) -> Self {
        let seen = match fs::read_to_string(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read seen-jobs ledger; starting empty");
                BTreeMap::new()
            }
            Ok(content) => match serde_json::from_str::<LedgerFile>(&content) {
                Ok(raw) => raw
                    .into_iter()
                    .map(|(company, ids)| (company, ids.into_iter().collect()))
                    .collect(),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "seen-jobs ledger is corrupt; starting empty");
                    BTreeMap::new()
                }
            },
        };
        Self {
            path: Some(path.to_path_buf()),
            seen,
        }
    }

    pub fn contains(&self, company: &str, job_id: &str) -> bool {
        self.seen
            .get(company)
            .is_some_and(|ids| ids.contains(job_id))
    }

    /// Idempotent insert; returns whether the pair was newly recorded.
    pub fn mark_seen(&mut self, company: &str, job_id: &str) -> bool {
        self.seen
            .entry(company.to_string())
            .or_default()
            .insert(job_id.to_string())
    }

    /// Atomically rewrite durable storage from the in-memory state (write to
    /// a sibling temp file, then rename over the target).
    pub fn save(&self) -> Result<()> {
        let path = self
            .path
            .as_deref()
            .context("ledger has no backing path")?;
        let file: LedgerFile = self
            .seen
            .iter()
            .map(|(company, ids)| (company.clone(), ids.iter().cloned().collect()))
            .collect();
        let json = serde_json::to_string_pretty(&file).context("serializing ledger")?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, path)
            .with_context(|| format!("replacing {} with {}", path.display(), tmp.display()))?;
        Ok(())
    }

    pub fn total_seen(&self) -> usize {
        self.seen.values().map(BTreeSet::len).sum()
    }
}
