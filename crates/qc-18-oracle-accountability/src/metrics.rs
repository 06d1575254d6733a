//! # Oracle Accountability Metrics
//!
//! Prometheus metrics for monitoring window passes and penalties.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! qc-18-oracle-accountability = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `oracle_window_passes_total` - Counter of slash-and-reset passes
//! - `oracle_validators_penalized_total` - Counter of validators slashed and jailed
//! - `oracle_validators_skipped_total` - Counter of skipped counter holders (by reason)
//! - `oracle_slashed_tokens_total` - Counter of tokens removed by slashing

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_counter, register_counter_vec, register_int_counter, Counter, CounterVec,
    IntCounter,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Total slash-and-reset passes
    pub static ref WINDOW_PASSES: IntCounter = register_int_counter!(
        "oracle_window_passes_total",
        "Total number of slash window passes"
    )
    .expect("Failed to create WINDOW_PASSES metric");

    /// Total validators slashed and jailed
    pub static ref VALIDATORS_PENALIZED: IntCounter = register_int_counter!(
        "oracle_validators_penalized_total",
        "Total number of validators slashed and jailed for oracle misses"
    )
    .expect("Failed to create VALIDATORS_PENALIZED metric");

    /// Skipped counter holders, labeled by reason
    pub static ref VALIDATORS_SKIPPED: CounterVec = register_counter_vec!(
        "oracle_validators_skipped_total",
        "Total number of counter holders skipped at window end",
        &["reason"]
    )
    .expect("Failed to create VALIDATORS_SKIPPED metric");

    /// Tokens removed by oracle slashing
    pub static ref SLASHED_TOKENS: Counter = register_counter!(
        "oracle_slashed_tokens_total",
        "Total tokens removed by oracle slashing"
    )
    .expect("Failed to create SLASHED_TOKENS metric");
}

/// Record a completed window pass
#[cfg(feature = "metrics")]
pub fn record_window_pass() {
    WINDOW_PASSES.inc();
}

/// Record a penalized validator and the tokens removed
#[cfg(feature = "metrics")]
pub fn record_validator_penalized(slashed_tokens: u128) {
    VALIDATORS_PENALIZED.inc();
    SLASHED_TOKENS.inc_by(slashed_tokens as f64);
}

/// Record a skipped counter holder with reason
#[cfg(feature = "metrics")]
pub fn record_validator_skipped(reason: &str) {
    VALIDATORS_SKIPPED.with_label_values(&[reason]).inc();
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_window_pass() {}

#[cfg(not(feature = "metrics"))]
pub fn record_validator_penalized(_slashed_tokens: u128) {}

#[cfg(not(feature = "metrics"))]
pub fn record_validator_skipped(_reason: &str) {}
