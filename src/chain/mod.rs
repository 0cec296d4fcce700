//! Option chain snapshots and their Greeks-enriched form.
//!
//! - [`OptionChainSnapshot`]: spot plus per-contract [`OptionQuote`]s for one underlying
//! - [`EnrichedOption`]: a quote paired with its computed [`crate::pricing::Greeks`]
//! - [`enrich_chain`]: maps a snapshot to its enriched chain, preserving order

mod enrich;
mod types;

pub use enrich::enrich_chain;
pub use types::{
    ContractType, DEFAULT_IV_PERCENT, EnrichedOption, OptionChainSnapshot, OptionQuote,
};
