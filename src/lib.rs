// =============================================================================
// KStock Signal — indicator and recommendation engine for KRX stocks
// =============================================================================
//
// Library crate exposing every module to the binary entry point and tests.

pub mod analysis;
pub mod calculators;
pub mod indicators;
pub mod market_data;
pub mod runtime_config;
pub mod signals;
pub mod types;
