// src/report.rs
//! Human-readable console summary of a finished run. Everything here reads
//! the outcome; nothing feeds back into the pipeline.

use crate::pipeline::RunOutcome;

pub fn print_summary(outcome: &RunOutcome) {
    let stats = &outcome.stats;
    println!(
        "--- {} postings fetched, {} kept ({} seen, {} title, {} location, {} stale) ---",
        stats.input, stats.kept, stats.seen, stats.title, stats.location, stats.stale
    );
    if outcome.provider_errors > 0 {
        println!("({} provider(s) failed to fetch this run)", outcome.provider_errors);
    }

    if outcome.postings.is_empty() {
        println!("No new relevant jobs found.");
        return;
    }

    println!("Found {} new, relevant jobs to review:", outcome.postings.len());
    for posting in &outcome.postings {
        let link = posting.url.as_deref().unwrap_or("-");
        println!(
            "  - {} at {} ({}) | ID: {} | {}",
            posting.title_display(),
            posting.company,
            posting.location_display(),
            posting.job_id,
            link
        );
    }
}
