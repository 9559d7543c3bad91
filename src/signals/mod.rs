// =============================================================================
// Signals Module
// =============================================================================
//
// Recommendation pipeline for a single stock:
// - Sub-score heuristics (valuation ratios, daily momentum)
// - Composite score and recommendation bucket

pub mod composite;
pub mod scoring;

pub use composite::{composite_signal, AnalysisScore, Signal};
pub use scoring::{fundamental_score, technical_score};
