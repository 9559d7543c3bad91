// =============================================================================
// Shared types used across the stock signal engine
// =============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily observation of a stock's closing price and traded volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
    #[serde(default)]
    pub volume: u64,
}

/// Extract the closing prices of a series, preserving order.
pub fn closes(series: &[PricePoint]) -> Vec<f64> {
    series.iter().map(|p| p.price).collect()
}

/// Where the price history behind an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    /// Crawled market snapshot on disk.
    Snapshot,
    /// Synthesised from the configured stock profile.
    Fallback,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snapshot => write!(f, "Snapshot"),
            Self::Fallback => write!(f, "Fallback"),
        }
    }
}

/// Headline shown next to a stock or the market overview.
///
/// Crawled items carry a link and an ISO timestamp; configured fallback items
/// carry a source, a relative time, a sentiment and an impact grade instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, alias = "time", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}
