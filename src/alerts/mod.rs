//! Alert detection over an enriched option chain.
//!
//! ## Pipeline
//!
//! ```text
//! OptionChainSnapshot + TradingConfig
//!   └── enrich_chain (Greeks per contract)
//!         ├── detect_gamma_spreads (adjacent strikes, calls and puts separately)
//!         └── detect_theta_decay (worst five decays)
//!               └── rank_alerts (ids, text, gamma alerts before theta alerts)
//! ```
//!
//! The two detectors read the same immutable chain and run concurrently.
//!
//! ## Components
//!
//! - [`generate_alerts`]: the whole pipeline for one snapshot
//! - [`detect_gamma_spreads`] / [`GammaSpreadDetection`]
//! - [`detect_theta_decay`] / [`ThetaDecayDetection`]
//! - [`rank_alerts`]: detections to [`Alert`]s
//! - [`AlertSummary`]: per-batch counts

mod engine;
mod gamma;
mod id;
mod ranker;
mod theta;
mod types;

pub use engine::{generate_alerts, generate_alerts_at};
pub use gamma::{GammaDirection, GammaSpreadDetection, detect_gamma_spreads};
pub use id::AlertIdGenerator;
pub use ranker::rank_alerts;
pub use theta::{
    HIGH_PRIORITY_THETA, MAX_THETA_CANDIDATES, ThetaDecayDetection, detect_theta_decay,
};
pub use types::{Alert, AlertSummary, AlertType, Priority};
