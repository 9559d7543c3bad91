// =============================================================================
// Market Overview — index levels and headlines for the dashboard header
// =============================================================================
//
// Index change rate is derived from the crawled level:
//
//   change_rate = change / value × 100
//
// A level that is missing, zero or non-finite cannot carry a rate, so the
// configured default for that index is shown instead.  Headlines come from the
// snapshot when it has any, otherwise from the selected stock's profile.
// =============================================================================

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::market_data::snapshot::{IndexLevel, MarketSnapshot};
use crate::runtime_config::RuntimeConfig;
use crate::types::{DataSource, NewsItem};

/// Displayed level of one market index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexQuote {
    pub name: String,
    pub code: String,
    pub value: f64,
    #[serde(default)]
    pub change: f64,
    /// Change in percent of the level; `None` when it cannot be derived.
    #[serde(default)]
    pub change_rate: Option<f64>,
}

impl IndexQuote {
    pub fn new(name: &str, code: &str, value: f64, change: f64, change_rate: f64) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            value,
            change,
            change_rate: Some(change_rate),
        }
    }

    /// Quote built from a crawled level, or `None` when the level is unusable.
    fn from_level(default: &IndexQuote, level: &IndexLevel) -> Option<Self> {
        if !level.value.is_finite() || level.value <= 0.0 {
            return None;
        }
        Some(Self {
            name: default.name.clone(),
            code: default.code.clone(),
            value: level.value,
            change: level.change,
            change_rate: change_rate(level.value, level.change),
        })
    }
}

/// Percentage change of an index at `value` that moved by `change`.
pub fn change_rate(value: f64, change: f64) -> Option<f64> {
    if value == 0.0 {
        return None;
    }
    Some(change / value * 100.0).filter(|rate| rate.is_finite())
}

/// One index together with where its figures came from.
#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry {
    #[serde(flatten)]
    pub quote: IndexQuote,
    pub source: DataSource,
}

/// Dashboard header: KOSPI, KOSDAQ and the current headlines.
#[derive(Debug, Clone, Serialize)]
pub struct MarketOverview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub indices: Vec<IndexEntry>,
    pub news_source: DataSource,
    pub news: Vec<NewsItem>,
}

impl MarketOverview {
    /// Build the overview, preferring snapshot data and falling back to the
    /// configured defaults.  `code` selects whose profile headlines are used
    /// when the snapshot has none; the default symbol is used otherwise.
    pub fn build(config: &RuntimeConfig, snapshot: Option<&MarketSnapshot>, code: Option<&str>) -> Self {
        let defaults = &config.default_indices;
        let levels = snapshot.and_then(|s| s.market_indices.as_ref());

        let indices = [
            (&defaults.kospi, levels.map(|l| &l.kospi)),
            (&defaults.kosdaq, levels.map(|l| &l.kosdaq)),
        ]
        .into_iter()
        .map(|(default, level)| match level.and_then(|l| IndexQuote::from_level(default, l)) {
            Some(quote) => IndexEntry { quote, source: DataSource::Snapshot },
            None => {
                debug!(index = %default.code, "no usable index level, using default");
                IndexEntry { quote: default.clone(), source: DataSource::Fallback }
            }
        })
        .collect();

        let (news, news_source) = match snapshot.filter(|s| !s.news.is_empty()) {
            Some(s) => (s.news.clone(), DataSource::Snapshot),
            None => {
                let code = code.unwrap_or(&config.default_symbol);
                (config.profile_for(code).news, DataSource::Fallback)
            }
        };

        info!(
            news = news.len(),
            news_source = %news_source,
            snapshot = snapshot.is_some(),
            "market overview built"
        );

        Self {
            timestamp: snapshot.and_then(|s| s.timestamp.clone()),
            indices,
            news_source,
            news,
        }
    }
}
