// =============================================================================
// Stock Analysis — Auditable record of one stock's recommendation
// =============================================================================
//
// Collects everything the dashboard shows for a stock: where the history came
// from, the price summary, the latest chart overlays, the sub-scores and the
// resulting signal.  Chart series are kept alongside so a renderer can draw
// them without recomputing.
// =============================================================================

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::indicators::{
    bollinger_bands, latest_bollinger, latest_moving_average, moving_average, price_summary,
    relative_strength_index, BollingerBands, BollingerResult, PriceSummary,
};
use crate::market_data::{synthesize_series, MarketSnapshot};
use crate::runtime_config::RuntimeConfig;
use crate::signals::{fundamental_score, technical_score, AnalysisScore, Signal};
use crate::types::{closes, DataSource, PricePoint};

/// Chart-aligned overlays for the price line.
#[derive(Debug, Clone, Serialize)]
pub struct ChartOverlays {
    pub ma_short: Vec<Option<f64>>,
    pub ma_long: Vec<Option<f64>>,
    pub bollinger: BollingerBands,
}

impl ChartOverlays {
    pub fn compute(prices: &[f64], config: &RuntimeConfig) -> Self {
        let params = &config.indicators;
        Self {
            ma_short: moving_average(prices, params.ma_short),
            ma_long: moving_average(prices, params.ma_long),
            bollinger: bollinger_bands(prices, params.bollinger_period, params.bollinger_multiplier),
        }
    }
}

/// Complete analysis of one stock.
#[derive(Debug, Clone, Serialize)]
pub struct StockAnalysis {
    /// Unique identifier for this analysis (UUID v4).
    pub id: String,

    pub code: String,
    pub name: String,

    /// Whether the history came from the snapshot or the profile fallback.
    pub data_source: DataSource,

    pub series: Vec<PricePoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<PriceSummary>,

    /// Current price relative to the window low and high, in percent.
    pub pct_above_min: Option<f64>,
    pub pct_below_max: Option<f64>,

    pub overlays: ChartOverlays,

    /// Latest value of each overlay, `None` with insufficient history.
    pub latest_ma_short: Option<f64>,
    pub latest_ma_long: Option<f64>,
    pub latest_bollinger: Option<BollingerResult>,

    pub rsi: Option<f64>,

    /// Valuation ratios, always taken from the stock profile.
    pub per: f64,
    pub pbr: f64,
    pub roe: f64,

    pub score: AnalysisScore,
    pub signal: Signal,
    pub signal_label: &'static str,

    /// ISO 8601 timestamp of when this analysis was created.
    pub created_at: String,
}

impl StockAnalysis {
    /// Analyse `code` using snapshot data where present and the configured
    /// profile everywhere else.
    pub fn build(
        code: &str,
        config: &RuntimeConfig,
        snapshot: Option<&MarketSnapshot>,
        end_date: NaiveDate,
    ) -> Self {
        let profile = config.profile_for(code);
        let quote = snapshot.and_then(|s| s.quote(code));

        let (series, data_source) = match snapshot.and_then(|s| s.history(code)) {
            Some(history) => (history.to_vec(), DataSource::Snapshot),
            None => {
                debug!(code, days = config.fallback_days, "no snapshot history, synthesising series");
                let seed = config.fallback_seed_for(code);
                (
                    synthesize_series(&profile, end_date, config.fallback_days, seed),
                    DataSource::Fallback,
                )
            }
        };

        let prices = closes(&series);
        let params = &config.indicators;
        let overlays = ChartOverlays::compute(&prices, config);
        let summary = price_summary(&prices);

        let technical = match quote {
            Some(q) => technical_score(q.change_percent, q.volume),
            None => technical_score(profile.change_percent, profile.volume),
        };
        let fundamental = fundamental_score(profile.per, profile.pbr, profile.roe);
        let score = AnalysisScore::new(fundamental, technical, profile.news_score);
        let signal = score.signal();

        let name = quote
            .map(|q| q.name.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| profile.name.clone());

        info!(
            code,
            name = %name,
            source = %data_source,
            points = series.len(),
            total = score.total_score(),
            signal = %signal,
            "stock analysed"
        );

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            code: code.to_string(),
            name,
            data_source,
            pct_above_min: summary.as_ref().and_then(PriceSummary::pct_above_min),
            pct_below_max: summary.as_ref().and_then(PriceSummary::pct_below_max),
            summary,
            latest_ma_short: latest_moving_average(&prices, params.ma_short),
            latest_ma_long: latest_moving_average(&prices, params.ma_long),
            latest_bollinger: latest_bollinger(&prices, params.bollinger_period, params.bollinger_multiplier),
            rsi: relative_strength_index(&prices, params.rsi_period),
            per: profile.per,
            pbr: profile.pbr,
            roe: profile.roe,
            overlays,
            series,
            score,
            signal,
            signal_label: signal.label(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    #[test]
    fn fallback_when_no_snapshot() {
        let cfg = RuntimeConfig::default();
        let a = StockAnalysis::build("005930", &cfg, None, end());
        assert_eq!(a.data_source, DataSource::Fallback);
        assert_eq!(a.series.len(), 31);
        assert_eq!(a.name, "Samsung Electronics");
        // per 12.5 / pbr 1.2 / roe 18.5 => 100; +2.04% on 15M => 85; news 70.
        assert_eq!(a.score.fundamental_score, 100);
        assert_eq!(a.score.technical_score, 85);
        assert_eq!(a.score.total_score(), 85);
        assert_eq!(a.signal, Signal::StrongBuy);
        assert_eq!(a.signal_label, "Strong buy");
        assert!(a.rsi.is_some());
        assert_eq!(a.overlays.ma_short.len(), 31);

        // latest values agree with the last chart slot
        assert_eq!(a.latest_ma_short, *a.overlays.ma_short.last().unwrap());
        assert_eq!(a.latest_ma_long, *a.overlays.ma_long.last().unwrap());
        let bands = a.latest_bollinger.as_ref().unwrap();
        let upper = a.overlays.bollinger.upper.last().unwrap().unwrap();
        assert!((bands.upper - upper).abs() < 1e-9);
        assert!((bands.middle - a.latest_ma_long.unwrap()).abs() < 1e-9);
        assert!(bands.upper >= bands.middle && bands.middle >= bands.lower);

        assert!(a.pct_above_min.unwrap() >= 0.0);
        assert!(a.pct_below_max.unwrap() >= 0.0);
    }

    #[test]
    fn snapshot_history_and_quote_preferred() {
        let snap = MarketSnapshot::from_json(
            r#"{
                "stocks": [ { "code": "005930", "name": "Samsung Live", "change_percent": -1.2, "volume": 9000000 } ],
                "historical_data": { "005930": [
                    { "date": "2025-06-27", "price": 100, "volume": 1 },
                    { "date": "2025-06-30", "price": 102, "volume": 1 },
                    { "date": "2025-07-01", "price": 101, "volume": 1 }
                ] }
            }"#,
        )
        .unwrap();
        let cfg = RuntimeConfig::default();
        let a = StockAnalysis::build("005930", &cfg, Some(&snap), end());

        assert_eq!(a.data_source, DataSource::Snapshot);
        assert_eq!(a.name, "Samsung Live");
        assert_eq!(a.series.len(), 3);
        // falling on low volume => 50 - 20 - 15
        assert_eq!(a.score.technical_score, 15);
        // too short for any overlay
        assert!(a.latest_ma_short.is_none());
        assert!(a.latest_bollinger.is_none());
        assert!(a.rsi.is_none());
        let summary = a.summary.as_ref().unwrap();
        assert_eq!(summary.max_index, 1);
        assert_eq!(summary.current, 101.0);
        assert!((a.pct_above_min.unwrap() - 1.0).abs() < 1e-9);
        assert!((a.pct_below_max.unwrap() - 100.0 / 102.0).abs() < 1e-9);
    }

    #[test]
    fn valuation_ratios_come_from_profile_not_quote_price() {
        let snap = MarketSnapshot::from_json(
            r#"{ "stocks": [ { "code": "005930", "current_price": 150000, "change_percent": 1.0, "volume": 20000000 } ] }"#,
        )
        .unwrap();
        let cfg = RuntimeConfig::default();
        let a = StockAnalysis::build("005930", &cfg, Some(&snap), end());
        // a price-derived placeholder would give per 30 / pbr 2.5
        assert!((a.per - 12.5).abs() < f64::EPSILON);
        assert!((a.pbr - 1.2).abs() < f64::EPSILON);
        assert!((a.roe - 18.5).abs() < f64::EPSILON);
        assert_eq!(a.score.fundamental_score, 100);
    }

    #[test]
    fn huge_fallback_days_do_not_panic() {
        let mut cfg = RuntimeConfig::default();
        cfg.fallback_days = 200_000_000;
        let a = StockAnalysis::build("005930", &cfg, None, end());
        assert_eq!(a.data_source, DataSource::Fallback);
        assert_eq!(a.series.len(), crate::market_data::fallback::MAX_FALLBACK_DAYS as usize + 1);
        assert_eq!(a.series.last().unwrap().date, end());
    }

    #[test]
    fn unknown_code_uses_default_profile() {
        let cfg = RuntimeConfig::default();
        let a = StockAnalysis::build("999999", &cfg, None, end());
        assert_eq!(a.code, "999999");
        assert_eq!(a.name, "Samsung Electronics");
        assert_eq!(a.data_source, DataSource::Fallback);
    }

    #[test]
    fn serialises_with_total_and_signal_key() {
        let cfg = RuntimeConfig::default();
        let a = StockAnalysis::build("012450", &cfg, None, end());
        let json = serde_json::to_value(&a).unwrap();
        // per 18.5 => +10, pbr 1.8 => +5, roe 9.8 => -10 => 55
        assert_eq!(json["score"]["fundamental_score"], 55);
        assert_eq!(json["score"]["total_score"], a.score.total_score());
        assert_eq!(json["signal"], a.signal.key());
        assert_eq!(json["signal_label"], a.signal.label());
        assert_eq!(json["data_source"], "Fallback");
        assert!(json["latest_bollinger"]["middle"].is_f64());
    }
}
