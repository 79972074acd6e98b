//! job-radar — Binary Entrypoint
//! Polls the configured job boards once, filters the results, and prints the
//! fresh, relevant, unseen postings. Per-provider fetch failures are reported
//! but never fail the run; only configuration errors do.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use job_radar::filter::FilterConfig;
use job_radar::ledger::{SeenLedger, DEFAULT_LEDGER_PATH, ENV_LEDGER_PATH};
use job_radar::registry::Registry;
use job_radar::{pipeline, report, HttpFetcher};

#[derive(Debug, Parser)]
#[command(name = "job-radar", version, about = "Find fresh, relevant, unseen job postings")]
struct Cli {
    /// Company keys to restrict the run to; all registered companies when omitted.
    companies: Vec<String>,

    /// Record the surfaced postings in the seen-jobs ledger and save it.
    #[arg(long)]
    mark_seen: bool,

    /// Path to the seen-jobs ledger file.
    #[arg(long)]
    ledger: Option<PathBuf>,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("job_radar=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn ledger_path(cli: &Cli) -> PathBuf {
    cli.ledger.clone().unwrap_or_else(|| {
        std::env::var(ENV_LEDGER_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LEDGER_PATH))
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op elsewhere.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    let registry = Registry::load_default()?.select(&cli.companies)?;
    let cfg = FilterConfig::load_default()?;
    let mut ledger = SeenLedger::load(&ledger_path(&cli));
    let fetcher = Arc::new(HttpFetcher::new()?);

    let now = chrono::Utc::now();
    let outcome = pipeline::run_once(fetcher, &registry, &ledger, &cfg, now).await?;
    report::print_summary(&outcome);

    if cli.mark_seen {
        for posting in &outcome.postings {
            ledger.mark_seen(&posting.company, &posting.job_id);
        }
        // A failed save keeps the in-memory state and the run result intact.
        if let Err(e) = ledger.save() {
            error!(error = %format!("{e:#}"), "could not save seen-jobs ledger");
        }
    }

    Ok(())
}
