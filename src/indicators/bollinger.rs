// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of an upper band (SMA + k*σ) and a lower band
// (SMA - k*σ) around the simple moving average, where σ is the population
// standard deviation of the same trailing window.
//
// The series form is chart-aligned with `moving_average`: slots without enough
// look-back are `None` in both bands.

use serde::{Deserialize, Serialize};

/// Chart-aligned upper and lower bands, one slot per input price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Bands at a single point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerResult {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Calculate the Bollinger Band series for `prices`.
///
/// For each index `i >= period - 1`:
/// - `upper[i]` = mean + `multiplier` * σ
/// - `lower[i]` = mean - `multiplier` * σ
///
/// Both vectors have the input length. `period == 0` yields all `None`.
pub fn bollinger_bands(prices: &[f64], period: usize, multiplier: f64) -> BollingerBands {
    let mut bands = BollingerBands {
        upper: vec![None; prices.len()],
        lower: vec![None; prices.len()],
    };
    if period == 0 || prices.len() < period {
        return bands;
    }

    for (offset, window) in prices.windows(period).enumerate() {
        let (mean, std_dev) = mean_and_std_dev(window);
        let idx = offset + period - 1;
        bands.upper[idx] = Some(mean + multiplier * std_dev);
        bands.lower[idx] = Some(mean - multiplier * std_dev);
    }

    bands
}

/// Calculate the bands for the most recent `period` prices only.
///
/// Returns `None` when fewer than `period` prices are available.
pub fn latest_bollinger(prices: &[f64], period: usize, multiplier: f64) -> Option<BollingerResult> {
    if period == 0 || prices.len() < period {
        return None;
    }

    let window = &prices[prices.len() - period..];
    let (middle, std_dev) = mean_and_std_dev(window);

    Some(BollingerResult {
        upper: middle + multiplier * std_dev,
        middle,
        lower: middle - multiplier * std_dev,
    })
}

/// Mean and population standard deviation of a non-empty window.
fn mean_and_std_dev(window: &[f64]) -> (f64, f64) {
    let n = window.len() as f64;
    let mean = window.iter().sum::<f64>() / n;
    let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::moving_average::moving_average;

    fn sample_prices() -> Vec<f64> {
        vec![
            75_200.0, 74_800.0, 76_100.0, 75_900.0, 77_300.0, 76_800.0, 75_400.0, 74_900.0,
            76_200.0, 77_800.0, 78_100.0, 77_600.0, 76_900.0, 78_400.0, 79_000.0, 78_300.0,
            77_700.0, 78_900.0, 79_600.0, 80_100.0, 79_400.0, 78_800.0, 80_500.0, 81_000.0,
        ]
    }

    #[test]
    fn bands_symmetric_around_moving_average() {
        let prices = sample_prices();
        let bands = bollinger_bands(&prices, 20, 2.0);
        let ma = moving_average(&prices, 20);

        for i in 0..prices.len() {
            match (bands.upper[i], bands.lower[i], ma[i]) {
                (Some(u), Some(l), Some(m)) => {
                    assert!(((u + l) / 2.0 - m).abs() < 1e-6, "asymmetric at {i}");
                    assert!(u >= l);
                }
                (None, None, None) => {}
                other => panic!("null policy mismatch at {i}: {other:?}"),
            }
        }
    }

    #[test]
    fn bands_match_input_length() {
        let prices = sample_prices();
        let bands = bollinger_bands(&prices, 5, 2.0);
        assert_eq!(bands.upper.len(), prices.len());
        assert_eq!(bands.lower.len(), prices.len());
        assert!(bands.upper[3].is_none());
        assert!(bands.upper[4].is_some());
    }

    #[test]
    fn bands_population_std_dev() {
        // Window [2, 4, 4, 4, 5, 5, 7, 9]: mean 5, population σ 2.
        let prices = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let bands = bollinger_bands(&prices, 8, 2.0);
        assert!((bands.upper[7].unwrap() - 9.0).abs() < 1e-12);
        assert!((bands.lower[7].unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn bands_flat_prices_collapse() {
        let prices = vec![100.0; 20];
        let bands = bollinger_bands(&prices, 20, 2.0);
        assert_eq!(bands.upper[19], Some(100.0));
        assert_eq!(bands.lower[19], Some(100.0));
    }

    #[test]
    fn bands_insufficient_data() {
        let bands = bollinger_bands(&[1.0, 2.0, 3.0], 20, 2.0);
        assert!(bands.upper.iter().all(Option::is_none));
        assert!(bands.lower.iter().all(Option::is_none));
    }

    #[test]
    fn latest_matches_series_tail() {
        let prices = sample_prices();
        let bands = bollinger_bands(&prices, 20, 2.0);
        let latest = latest_bollinger(&prices, 20, 2.0).unwrap();
        assert!((bands.upper.last().unwrap().unwrap() - latest.upper).abs() < 1e-9);
        assert!((bands.lower.last().unwrap().unwrap() - latest.lower).abs() < 1e-9);
        assert!(latest.upper > latest.middle && latest.middle > latest.lower);
    }

    #[test]
    fn latest_insufficient_data() {
        assert!(latest_bollinger(&[1.0, 2.0, 3.0], 20, 2.0).is_none());
        assert!(latest_bollinger(&[1.0, 2.0, 3.0], 0, 2.0).is_none());
    }
}
