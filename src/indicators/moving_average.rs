// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Chart-aligned SMA: one output slot per input price, so the series can be
// overlaid directly on the price line.
//
//   SMA_i = (p_{i-period+1} + ... + p_i) / period     for i >= period - 1
//   SMA_i = None                                       otherwise
// =============================================================================

/// Compute the chart-aligned SMA of `prices` over `period`.
///
/// The output always has the same length as `prices`. Slots without enough
/// look-back are `None`.
///
/// # Edge cases
/// - `period == 0` => every slot is `None`
/// - `prices.len() < period` => every slot is `None`
pub fn moving_average(prices: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; prices.len()];
    if period == 0 || prices.len() < period {
        return result;
    }

    let period_f = period as f64;
    for (offset, window) in prices.windows(period).enumerate() {
        let sum: f64 = window.iter().sum();
        result[offset + period - 1] = Some(sum / period_f);
    }

    result
}

/// Most recent SMA value, or `None` when there is not enough history.
pub fn latest_moving_average(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period {
        return None;
    }
    let window = &prices[prices.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_reference_values() {
        let ma = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert_eq!(ma, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn sma_preserves_length() {
        let prices: Vec<f64> = (1..=31).map(|x| x as f64 * 100.0).collect();
        for period in [1, 5, 20, 31, 40] {
            assert_eq!(moving_average(&prices, period).len(), prices.len());
        }
    }

    #[test]
    fn sma_leading_slots_are_none_then_trailing_mean() {
        let prices = vec![10.0, 12.0, 9.0, 14.0, 11.0, 13.0, 8.0];
        let period = 4;
        let ma = moving_average(&prices, period);
        for (i, slot) in ma.iter().enumerate() {
            if i < period - 1 {
                assert!(slot.is_none(), "slot {i} should be None");
            } else {
                let window = &prices[i + 1 - period..=i];
                let expected = window.iter().sum::<f64>() / period as f64;
                assert!((slot.unwrap() - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn sma_period_zero() {
        assert_eq!(moving_average(&[1.0, 2.0], 0), vec![None, None]);
    }

    #[test]
    fn sma_insufficient_data() {
        assert_eq!(moving_average(&[1.0, 2.0], 5), vec![None, None]);
        assert!(moving_average(&[], 3).is_empty());
    }

    #[test]
    fn sma_period_one_is_identity() {
        let prices = vec![4.0, 7.0, 1.0];
        let ma = moving_average(&prices, 1);
        assert_eq!(ma, vec![Some(4.0), Some(7.0), Some(1.0)]);
    }

    #[test]
    fn latest_matches_last_slot() {
        let prices: Vec<f64> = (1..=25).map(|x| x as f64).collect();
        let full = moving_average(&prices, 20);
        assert_eq!(latest_moving_average(&prices, 20), *full.last().unwrap());
        assert!(latest_moving_average(&prices[..3], 5).is_none());
    }
}
