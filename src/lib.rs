//! # Option Chain Alerts - Greeks-Driven Signal Scanner
//!
//! A Rust library that scans index option chains, computes Black-Scholes
//! Greeks for every contract and emits ranked trading alerts for two
//! opportunities: gamma spreads between adjacent strikes and high theta decay.
//!
//! ## Key Features
//!
//! - **Deterministic Greeks**: Delta, gamma, theta (per day) and vega (per vol
//!   point) from a closed-form Black-Scholes model with an Abramowitz-Stegun
//!   normal CDF. Identical inputs always produce bit-identical outputs.
//!
//! - **Gamma Spread Detection**: Adjacent strikes of the same contract type
//!   whose gamma difference reaches a configurable threshold.
//!
//! - **Theta Decay Detection**: The five contracts with the steepest daily
//!   time decay beyond a configurable floor.
//!
//! - **Ranked, Self-Describing Alerts**: Each alert carries a unique id,
//!   a priority and human-readable message, details and recommendation text.
//!
//! - **Decoupled Persistence**: Alerts are handed to an [`sink::AlertSink`]
//!   without blocking the scan; sink failures are logged, never raised.
//!
//! - **Result-Based Error Handling**: All fallible operations return
//!   `Result<T, Error>` with descriptive error types.
//!
//! ## Architecture
//!
//! ```text
//! AlertMonitor (one cycle per interval, NSE session hours)
//!   └── SnapshotSource (external chain feed)
//!         └── generate_alerts (per OptionChainSnapshot)
//!               ├── enrich_chain → EnrichedOption (quote + Greeks)
//!               ├── detect_gamma_spreads ┐ run concurrently
//!               ├── detect_theta_decay   ┘
//!               └── rank_alerts → Vec<Alert>
//!                     └── AlertDispatcher → AlertSink
//! ```
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`pricing`] | Normal distribution helpers and Black-Scholes Greeks |
//! | [`chain`] | Snapshot and quote types, Greeks enrichment |
//! | [`alerts`] | Detectors, ranking and the alert pipeline |
//! | [`config`] | Thresholds, symbols, pricing and monitoring settings |
//! | [`sink`] | Persistence port, dispatcher and in-memory sinks |
//! | [`monitor`] | Per-cycle scan over every configured symbol |
//! | [`market_hours`] | NSE session check |
//! | [`error`] | Error types and `Result` type alias |
//! | [`utils`] | Date and decimal helpers |
//!
//! ## Example Usage
//!
//! ### Scanning a Snapshot
//!
//! ```rust
//! use chrono::{NaiveDate, Utc};
//! use option_chain_alerts::alerts::{AlertType, generate_alerts};
//! use option_chain_alerts::chain::{ContractType, OptionChainSnapshot, OptionQuote};
//! use option_chain_alerts::config::TradingConfig;
//! use rust_decimal_macros::dec;
//!
//! let expiry = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
//! let snapshot = OptionChainSnapshot::new(
//!     "NSE:NIFTY50-INDEX",
//!     dec!(24000),
//!     Utc::now(),
//!     vec![
//!         OptionQuote::new(dec!(24000), ContractType::Call, dec!(180), dec!(15), expiry),
//!         OptionQuote::new(dec!(24000), ContractType::Put, dec!(160), dec!(15), expiry),
//!     ],
//! );
//!
//! let alerts = generate_alerts(&snapshot, &TradingConfig::default());
//! assert!(alerts.iter().all(|a| a.alert_type == AlertType::ThetaDecay));
//! ```
//!
//! ### Computing Greeks
//!
//! ```rust
//! use option_chain_alerts::chain::ContractType;
//! use option_chain_alerts::pricing::compute_greeks;
//!
//! let greeks = compute_greeks(ContractType::Call, 24000.0, 24000.0, 15.0, None, None);
//! assert!(greeks.delta > 0.5 && greeks.delta < 0.6);
//! assert!(greeks.theta < 0.0);
//! ```
//!
//! ## Demos
//!
//! | Demo | Description |
//! |------|-------------|
//! | `alert_scan` | Scan a synthetic NIFTY chain and persist alerts in memory |
//!
//! Run with:
//! ```bash
//! cargo run --example alert_scan
//! ```
//!
//! ## Benchmarks
//!
//! - **greeks_bench**: Greeks and chain enrichment
//! - **alerts_bench**: Detectors and the full alert pipeline
//!
//! ```bash
//! cargo bench
//! cargo bench -- greeks_benches
//! ```
//!
//! ## Dependencies
//!
//! - **rust_decimal** (1.39): Exact prices and strikes
//! - **chrono** (0.4): Timestamps, expiries and session hours
//! - **serde** / **serde_json** (1.0): Snapshot, alert and config formats
//! - **rayon** (1.10): Concurrent detectors
//! - **tokio** (1.48): Alert dispatch worker
//! - **dashmap** (6): Concurrent in-memory alert store
//! - **tracing** (0.1): Structured logging
//! - **thiserror** (2.0): Error handling

pub mod alerts;
pub mod chain;
pub mod config;
pub mod error;
pub mod market_hours;
pub mod monitor;
pub mod pricing;
pub mod sink;
pub mod utils;

pub use error::{Error, Result};
