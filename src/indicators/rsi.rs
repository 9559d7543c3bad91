// =============================================================================
// Relative Strength Index (RSI) — single-window
// =============================================================================
//
// RSI measures the balance of recent up moves against down moves.
//
// Step 1 — Compute price changes (deltas) over the FIRST `period` steps of the
//          series (prices[1] - prices[0] ... prices[period] - prices[period-1]).
// Step 2 — avg_gain = sum(positive deltas) / period
//          avg_loss = sum(|negative deltas|) / period
// Step 3 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// This is a one-shot window: there is no Wilder smoothing over the rest of the
// series, so values differ from the textbook indicator on long inputs.
// =============================================================================

/// Default look-back for the dashboard RSI.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Compute the single-window RSI of `prices` over `period`.
///
/// # Edge cases
/// - `period == 0` => `None`
/// - `prices.len() <= period` => `None` (need `period` deltas)
/// - No losses and some gains => 100.0
/// - No movement at all => 50.0
/// - Non-finite inputs propagate into the result; callers validate first.
pub fn relative_strength_index(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() <= period {
        return None;
    }

    let (gains, losses) = prices[..=period]
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold((0.0_f64, 0.0_f64), |(g, l), d| {
            if d > 0.0 {
                (g + d, l)
            } else {
                (g, l + d.abs())
            }
        });

    let period_f = period as f64;
    Some(rsi_from_averages(gains / period_f, losses / period_f))
}

/// [`relative_strength_index`] with the 14-step default period.
pub fn relative_strength_index_default(prices: &[f64]) -> Option<f64> {
    relative_strength_index(prices, DEFAULT_RSI_PERIOD)
}

/// Human-readable zone for an RSI value.
pub fn rsi_zone(value: f64) -> &'static str {
    if value >= 70.0 {
        "OVERBOUGHT"
    } else if value <= 30.0 {
        "OVERSOLD"
    } else {
        "NEUTRAL"
    }
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0
    } else if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}
