// =============================================================================
// Composite Signal — three sub-scores to a recommendation bucket
// =============================================================================
//
//   total  = round((fundamental + technical + news) / 3)
//   signal = first match, descending:
//              total >= 80 => STRONG BUY
//              total >= 60 => BUY
//              total >= 40 => HOLD
//              total >= 20 => CAUTION
//              otherwise   => SELL
// =============================================================================

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Recommendation bucket derived from a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Signal {
    StrongBuy,
    Buy,
    Hold,
    Caution,
    Sell,
}

impl Signal {
    /// Bucket a total score. Thresholds are inclusive lower bounds.
    pub fn from_total_score(total: u8) -> Self {
        match total {
            80..=u8::MAX => Self::StrongBuy,
            60..=79 => Self::Buy,
            40..=59 => Self::Hold,
            20..=39 => Self::Caution,
            _ => Self::Sell,
        }
    }

    /// Stable machine key, also used as the serde representation.
    pub fn key(&self) -> &'static str {
        match self {
            Self::StrongBuy => "strong-buy",
            Self::Buy => "buy",
            Self::Hold => "hold",
            Self::Caution => "caution",
            Self::Sell => "sell",
        }
    }

    /// Short description for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::StrongBuy => "Strong buy",
            Self::Buy => "Consider buying",
            Self::Hold => "Neutral / wait",
            Self::Caution => "Buy with caution",
            Self::Sell => "Do not buy",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The three sub-scores behind a recommendation.
///
/// The total is never stored; it is recomputed from the sub-scores on every
/// read and on serialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AnalysisScore {
    pub fundamental_score: u8,
    pub technical_score: u8,
    pub news_score: u8,
}

impl AnalysisScore {
    /// Build a score, clamping every sub-score to 100.
    pub fn new(fundamental_score: u8, technical_score: u8, news_score: u8) -> Self {
        Self {
            fundamental_score: fundamental_score.min(100),
            technical_score: technical_score.min(100),
            news_score: news_score.min(100),
        }
    }

    /// Rounded mean of the three sub-scores.
    pub fn total_score(&self) -> u8 {
        let sum = u32::from(self.fundamental_score)
            + u32::from(self.technical_score)
            + u32::from(self.news_score);
        (f64::from(sum) / 3.0).round() as u8
    }

    pub fn signal(&self) -> Signal {
        Signal::from_total_score(self.total_score())
    }
}

impl Serialize for AnalysisScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AnalysisScore", 4)?;
        state.serialize_field("fundamental_score", &self.fundamental_score)?;
        state.serialize_field("technical_score", &self.technical_score)?;
        state.serialize_field("news_score", &self.news_score)?;
        state.serialize_field("total_score", &self.total_score())?;
        state.end()
    }
}

/// Map three sub-scores straight to a [`Signal`].
pub fn composite_signal(fundamental_score: u8, technical_score: u8, news_score: u8) -> Signal {
    AnalysisScore::new(fundamental_score, technical_score, news_score).signal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_reference_cases() {
        assert_eq!(composite_signal(80, 80, 80), Signal::StrongBuy);
        assert_eq!(composite_signal(50, 50, 50), Signal::Hold);
        assert_eq!(composite_signal(10, 10, 10), Signal::Sell);
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(Signal::from_total_score(100), Signal::StrongBuy);
        assert_eq!(Signal::from_total_score(80), Signal::StrongBuy);
        assert_eq!(Signal::from_total_score(79), Signal::Buy);
        assert_eq!(Signal::from_total_score(60), Signal::Buy);
        assert_eq!(Signal::from_total_score(59), Signal::Hold);
        assert_eq!(Signal::from_total_score(40), Signal::Hold);
        assert_eq!(Signal::from_total_score(39), Signal::Caution);
        assert_eq!(Signal::from_total_score(20), Signal::Caution);
        assert_eq!(Signal::from_total_score(19), Signal::Sell);
        assert_eq!(Signal::from_total_score(0), Signal::Sell);
    }

    #[test]
    fn total_is_rounded_mean() {
        // (80 + 75 + 70) / 3 = 75
        assert_eq!(AnalysisScore::new(80, 75, 70).total_score(), 75);
        // (60 + 55 + 65) / 3 = 60
        assert_eq!(AnalysisScore::new(55, 60, 65).total_score(), 60);
        // 79.67 rounds up into the strong-buy bucket
        let score = AnalysisScore::new(80, 80, 79);
        assert_eq!(score.total_score(), 80);
        assert_eq!(score.signal(), Signal::StrongBuy);
        // 59.33 rounds down
        assert_eq!(AnalysisScore::new(60, 59, 59).total_score(), 59);
    }

    #[test]
    fn total_follows_sub_score_changes() {
        let mut score = AnalysisScore::new(50, 50, 50);
        assert_eq!(score.signal(), Signal::Hold);
        score.news_score = 100;
        score.technical_score = 100;
        assert_eq!(score.total_score(), 83);
        assert_eq!(score.signal(), Signal::StrongBuy);
    }

    #[test]
    fn new_clamps_sub_scores() {
        let score = AnalysisScore::new(250, 100, 100);
        assert_eq!(score.fundamental_score, 100);
        assert_eq!(score.total_score(), 100);
    }

    #[test]
    fn serialises_with_derived_total() {
        let json = serde_json::to_value(AnalysisScore::new(80, 75, 70)).unwrap();
        assert_eq!(json["total_score"], 75);
        assert_eq!(json["news_score"], 70);
    }

    #[test]
    fn deserialise_ignores_stale_total() {
        let json = r#"{ "fundamental_score": 10, "technical_score": 10, "news_score": 10, "total_score": 99 }"#;
        let score: AnalysisScore = serde_json::from_str(json).unwrap();
        assert_eq!(score.total_score(), 10);
        assert_eq!(score.signal(), Signal::Sell);
    }

    #[test]
    fn signal_serde_keys() {
        assert_eq!(serde_json::to_string(&Signal::StrongBuy).unwrap(), "\"strong-buy\"");
        let s: Signal = serde_json::from_str("\"caution\"").unwrap();
        assert_eq!(s, Signal::Caution);
        assert_eq!(Signal::Sell.to_string(), "sell");
    }
}
