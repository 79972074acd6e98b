// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod dates;
pub mod fetch;
pub mod filter;
pub mod ledger;
pub mod normalize;
pub mod pipeline;
pub mod posting;
pub mod registry;
pub mod report;

// ---- Re-exports for stable public API ----
pub use crate::fetch::{Fetch, HttpFetcher};
pub use crate::filter::{FilterConfig, FilterStats};
pub use crate::ledger::SeenLedger;
pub use crate::pipeline::{run_once, RunOutcome};
pub use crate::posting::Posting;
pub use crate::registry::{ParserKind, ProviderDescriptor, Registry};
