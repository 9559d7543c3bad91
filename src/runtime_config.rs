// =============================================================================
// Runtime Configuration — Engine settings and per-stock default profiles
// =============================================================================
//
// Central configuration for the stock signal engine.  Besides indicator
// parameters it carries the per-stock default profiles that stand in for
// crawled data whenever the market snapshot is missing or incomplete.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash.  All fields carry `#[serde(default)]` so that adding new fields
// never breaks loading an older config file.
//
// =============================================================================

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::market_data::IndexQuote;
use crate::types::NewsItem;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_symbol() -> String {
    "005930".to_string()
}

fn default_symbols() -> Vec<String> {
    default_profiles().into_keys().collect()
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("data/latest_stock_data.json")
}

fn default_fallback_days() -> u32 {
    30
}

fn default_fallback_seed() -> u64 {
    20_250_701
}

fn default_market() -> String {
    "KOSPI".to_string()
}

fn default_news_score() -> u8 {
    70
}

fn default_ma_short() -> usize {
    5
}

fn default_ma_long() -> usize {
    20
}

fn default_bollinger_period() -> usize {
    20
}

fn default_bollinger_multiplier() -> f64 {
    2.0
}

fn default_rsi_period() -> usize {
    14
}

fn default_indices() -> DefaultIndices {
    DefaultIndices {
        kospi: IndexQuote::new("KOSPI", "KS11", 2450.00, 15.50, 0.64),
        kosdaq: IndexQuote::new("KOSDAQ", "KQ11", 850.25, 8.75, 1.04),
    }
}

#[allow(clippy::too_many_arguments)]
fn profile(
    name: &str,
    base_price: f64,
    volume: u64,
    change_percent: f64,
    per: f64,
    pbr: f64,
    roe: f64,
    news_score: u8,
    headlines: [(&str, &str); 2],
) -> StockProfile {
    // First headline is the fresher, higher-impact one.
    let news = headlines
        .iter()
        .zip([("2 hours ago", "high"), ("4 hours ago", "medium")])
        .map(|(&(title, source), (time, impact))| NewsItem {
            title: title.to_string(),
            link: None,
            source: Some(source.to_string()),
            sentiment: Some("positive".to_string()),
            impact: Some(impact.to_string()),
            timestamp: Some(time.to_string()),
        })
        .collect();

    StockProfile {
        name: name.to_string(),
        market: default_market(),
        base_price,
        volume,
        change_percent,
        per,
        pbr,
        roe,
        news_score,
        news,
    }
}

fn default_profiles() -> BTreeMap<String, StockProfile> {
    BTreeMap::from([
        (
            "005930".to_string(),
            profile("Samsung Electronics", 75_000.0, 15_000_000, 2.04, 12.5, 1.2, 18.5, 70, [
                ("Samsung Electronics Q2 earnings outlook positive", "Korea Economic Daily"),
                ("Global chip demand expected to lift earnings", "Investment News"),
            ]),
        ),
        (
            "003490".to_string(),
            profile("Korean Air", 25_000.0, 8_000_000, 2.04, 8.2, 0.8, 12.3, 75, [
                ("Korean Air earnings improve as travel demand recovers", "Economy Daily"),
                ("Plan to expand international routes announced", "Aviation News"),
            ]),
        ),
        (
            "122870".to_string(),
            profile("YG Entertainment", 45_000.0, 12_000_000, 2.04, 15.8, 2.1, 14.2, 80, [
                ("Expectations rise for YG Entertainment's new content", "Entertainment News"),
                ("Global expansion strategy announced", "Munhwa Ilbo"),
            ]),
        ),
        (
            "012450".to_string(),
            profile("Hanwha Aerospace", 35_000.0, 10_000_000, 2.04, 18.5, 1.8, 9.8, 65, [
                ("Hanwha Aerospace expands defense orders", "Defense Daily"),
                ("Wider participation in space development projects", "Science & Tech News"),
            ]),
        ),
        (
            "005380".to_string(),
            profile("Hyundai Motor", 180_000.0, 20_000_000, 2.04, 6.8, 0.9, 16.5, 75, [
                ("Hyundai Motor EV sales stay strong", "Auto Journal"),
                ("Investment in new technology expanded", "Economy Daily"),
            ]),
        ),
        (
            "004370".to_string(),
            profile("Nongshim", 120_000.0, 15_000_000, 2.04, 22.3, 2.5, 11.2, 70, [
                ("Nongshim widens overseas market push", "Food Daily"),
                ("New product launches expected to lift sales", "Consumer News"),
            ]),
        ),
    ])
}

// =============================================================================
// StockProfile
// =============================================================================

/// Default figures for one stock code, used when crawled data is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockProfile {
    pub name: String,

    #[serde(default = "default_market")]
    pub market: String,

    /// Reference price the fallback series oscillates around.
    #[serde(default)]
    pub base_price: f64,

    /// Typical daily volume.
    #[serde(default)]
    pub volume: u64,

    /// Typical daily change in percent.
    #[serde(default)]
    pub change_percent: f64,

    #[serde(default)]
    pub per: f64,

    #[serde(default)]
    pub pbr: f64,

    #[serde(default)]
    pub roe: f64,

    /// News sentiment score in [0, 100].
    #[serde(default = "default_news_score")]
    pub news_score: u8,

    /// Headlines shown when the snapshot has no news.
    #[serde(default)]
    pub news: Vec<NewsItem>,
}

impl StockProfile {
    /// Neutral profile for codes with no configured defaults at all.
    pub fn neutral(code: &str) -> Self {
        Self {
            name: code.to_string(),
            market: default_market(),
            base_price: 0.0,
            volume: 0,
            change_percent: 0.0,
            per: 0.0,
            pbr: 0.0,
            roe: 0.0,
            news_score: 50,
            news: Vec::new(),
        }
    }
}

// =============================================================================
// IndicatorParams
// =============================================================================

/// Look-back windows for the chart overlays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorParams {
    #[serde(default = "default_ma_short")]
    pub ma_short: usize,

    #[serde(default = "default_ma_long")]
    pub ma_long: usize,

    #[serde(default = "default_bollinger_period")]
    pub bollinger_period: usize,

    /// Band width in standard deviations.
    #[serde(default = "default_bollinger_multiplier")]
    pub bollinger_multiplier: f64,

    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            ma_short: default_ma_short(),
            ma_long: default_ma_long(),
            bollinger_period: default_bollinger_period(),
            bollinger_multiplier: default_bollinger_multiplier(),
            rsi_period: default_rsi_period(),
        }
    }
}

// =============================================================================
// DefaultIndices
// =============================================================================

/// Index levels shown when the snapshot has none (or unusable ones).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultIndices {
    pub kospi: IndexQuote,
    pub kosdaq: IndexQuote,
}

impl Default for DefaultIndices {
    fn default() -> Self {
        default_indices()
    }
}

// =============================================================================
// RuntimeConfig
// =============================================================================

/// Top-level runtime configuration.
///
/// Every field has a serde default so that older JSON files missing new fields
/// will still deserialise correctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Stock codes analysed on each run.
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,

    /// Profile used for codes that have none of their own.
    #[serde(default = "default_symbol")]
    pub default_symbol: String,

    /// Location of the crawler's latest snapshot.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// Number of days synthesised before today when falling back.
    #[serde(default = "default_fallback_days")]
    pub fallback_days: u32,

    /// Seed mixed with the stock code for fallback series.
    #[serde(default = "default_fallback_seed")]
    pub fallback_seed: u64,

    #[serde(default)]
    pub indicators: IndicatorParams,

    #[serde(default)]
    pub default_indices: DefaultIndices,

    /// Default profile per stock code.
    #[serde(default = "default_profiles")]
    pub profiles: BTreeMap<String, StockProfile>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
            default_symbol: default_symbol(),
            snapshot_path: default_snapshot_path(),
            fallback_days: default_fallback_days(),
            fallback_seed: default_fallback_seed(),
            indicators: IndicatorParams::default(),
            default_indices: DefaultIndices::default(),
            profiles: default_profiles(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read runtime config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse runtime config from {}", path.display()))?;

        info!(
            path = %path.display(),
            symbols = ?config.symbols,
            profiles = config.profiles.len(),
            "runtime config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise runtime config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "runtime config saved (atomic)");
        Ok(())
    }

    /// Profile for `code`, falling back to the default symbol's profile.
    pub fn profile_for(&self, code: &str) -> StockProfile {
        if let Some(profile) = self.profiles.get(code) {
            return profile.clone();
        }
        match self.profiles.get(&self.default_symbol) {
            Some(profile) => {
                warn!(code, default_symbol = %self.default_symbol, "no profile for code, using default symbol");
                profile.clone()
            }
            None => {
                warn!(code, "no profile for code or default symbol, using neutral profile");
                StockProfile::neutral(code)
            }
        }
    }

    /// Seed for the fallback series of `code`.
    pub fn fallback_seed_for(&self, code: &str) -> u64 {
        code.bytes()
            .fold(self.fallback_seed, |acc, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)))
    }
}
