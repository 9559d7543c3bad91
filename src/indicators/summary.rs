// =============================================================================
// Price Summary — low / high / last over a price window
// =============================================================================

use serde::{Deserialize, Serialize};

/// Low, high and current price of a window, with the positions of the
/// extremes so they can be annotated on a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub min: f64,
    pub min_index: usize,
    pub max: f64,
    pub max_index: usize,
    pub current: f64,
}

impl PriceSummary {
    /// Percent distance of the current price above the window low.
    pub fn pct_above_min(&self) -> Option<f64> {
        if self.min == 0.0 {
            return None;
        }
        Some((self.current - self.min) / self.min * 100.0)
    }

    /// Percent distance of the current price below the window high.
    pub fn pct_below_max(&self) -> Option<f64> {
        if self.max == 0.0 {
            return None;
        }
        Some((self.max - self.current) / self.max * 100.0)
    }
}

/// Summarise `prices`. Ties resolve to the first occurrence.
///
/// Returns `None` for an empty slice.
pub fn price_summary(prices: &[f64]) -> Option<PriceSummary> {
    let &current = prices.last()?;

    let mut summary = PriceSummary {
        min: prices[0],
        min_index: 0,
        max: prices[0],
        max_index: 0,
        current,
    };

    for (i, &p) in prices.iter().enumerate().skip(1) {
        if p < summary.min {
            summary.min = p;
            summary.min_index = i;
        }
        if p > summary.max {
            summary.max = p;
            summary.max_index = i;
        }
    }

    Some(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_empty() {
        assert!(price_summary(&[]).is_none());
    }

    #[test]
    fn summary_basic() {
        let s = price_summary(&[5.0, 3.0, 9.0, 3.0, 9.0, 6.0]).unwrap();
        assert_eq!(s.min, 3.0);
        assert_eq!(s.min_index, 1);
        assert_eq!(s.max, 9.0);
        assert_eq!(s.max_index, 2);
        assert_eq!(s.current, 6.0);
    }

    #[test]
    fn summary_single_point() {
        let s = price_summary(&[42.0]).unwrap();
        assert_eq!((s.min_index, s.max_index), (0, 0));
        assert_eq!(s.current, 42.0);
    }

    #[test]
    fn summary_distances() {
        let s = price_summary(&[80.0, 100.0, 90.0]).unwrap();
        assert!((s.pct_above_min().unwrap() - 12.5).abs() < 1e-9);
        assert!((s.pct_below_max().unwrap() - 10.0).abs() < 1e-9);
        let zero = price_summary(&[0.0, 1.0]).unwrap();
        assert!(zero.pct_above_min().is_none());
    }
}
