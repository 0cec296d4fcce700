//! Benchmarks for option-chain-alerts library.
//!
//! - **greeks_bench**: Greeks computation and chain enrichment
//! - **alerts_bench**: Detectors and the full alert pipeline


use criterion::{criterion_group, criterion_main};

// Pricing benchmarks
criterion_group!(
    greeks_benches,
    greeks_bench::greeks_operations,
    greeks_bench::enrichment_scaling,
);

// Alert pipeline benchmarks
criterion_group!(
    alerts_benches,
    alerts_bench::detector_operations,
    alerts_bench::pipeline_scaling,
);

criterion_main!(greeks_benches, alerts_benches);
