use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::types::{NewsItem, PricePoint};

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// Latest quote for one stock as written by the crawler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockQuote {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub market: String,
    #[serde(default)]
    pub current_price: f64,
    #[serde(default)]
    pub change_amount: f64,
    #[serde(default)]
    pub change_percent: f64,
    #[serde(default)]
    pub volume: u64,
    /// Market capitalisation in units of 100M KRW.
    #[serde(default)]
    pub market_cap: f64,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Level and change of a market index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexLevel {
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketIndices {
    pub kospi: IndexLevel,
    pub kosdaq: IndexLevel,
}

/// One crawl of the market: quotes, indices, headlines and daily history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub stocks: Vec<StockQuote>,
    #[serde(default)]
    pub market_indices: Option<MarketIndices>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
    /// Daily history keyed by stock code.
    #[serde(default)]
    pub historical_data: HashMap<String, Vec<PricePoint>>,
}

// ---------------------------------------------------------------------------
// MarketSnapshot
// ---------------------------------------------------------------------------

impl MarketSnapshot {
    /// Parse a snapshot from its JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let mut snapshot: Self =
            serde_json::from_str(content).context("failed to parse market snapshot JSON")?;

        for (code, series) in snapshot.historical_data.iter_mut() {
            if !series.windows(2).all(|w| w[0].date <= w[1].date) {
                debug!(code = %code, points = series.len(), "history out of order, sorting by date");
                series.sort_by_key(|p| p.date);
            }
        }

        Ok(snapshot)
    }

    /// Load the snapshot file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read market snapshot from {}", path.display()))?;

        let snapshot = Self::from_json(&content)
            .with_context(|| format!("invalid market snapshot in {}", path.display()))?;

        info!(
            path = %path.display(),
            stocks = snapshot.stocks.len(),
            histories = snapshot.historical_data.len(),
            news = snapshot.news.len(),
            "market snapshot loaded"
        );

        Ok(snapshot)
    }

    /// Latest quote for `code`.
    pub fn quote(&self, code: &str) -> Option<&StockQuote> {
        self.stocks.iter().find(|s| s.code == code)
    }

    /// Daily history for `code`; `None` when absent or empty.
    pub fn history(&self, code: &str) -> Option<&[PricePoint]> {
        self.historical_data
            .get(code)
            .filter(|series| !series.is_empty())
            .map(Vec::as_slice)
    }
}
