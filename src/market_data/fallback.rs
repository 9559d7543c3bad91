// =============================================================================
// Fallback Series — synthesised daily history from a stock profile
// =============================================================================
//
// When the snapshot carries no history for a stock the chart still needs a
// series.  Each day's price is drawn uniformly within ±5 % of the profile's
// base price and rounded to a whole won; volume is drawn from [10M, 30M).
//
// The generator is seeded so the same (profile, end date, seed) always yields
// the same series.
// =============================================================================

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::runtime_config::StockProfile;
use crate::types::PricePoint;

/// Half-width of the price band around the base price.
const PRICE_BAND: f64 = 0.05;

const MIN_VOLUME: u64 = 10_000_000;
const MAX_VOLUME: u64 = 30_000_000;

/// Longest look-back synthesised, about ten years of calendar days.
pub const MAX_FALLBACK_DAYS: u32 = 3_650;

/// Synthesise `days + 1` chronological points ending at `end_date`.
///
/// `days` is capped at [`MAX_FALLBACK_DAYS`]. Days that fall before the
/// earliest representable date are skipped, so the series may be shorter.
pub fn synthesize_series(
    profile: &StockProfile,
    end_date: NaiveDate,
    days: u32,
    seed: u64,
) -> Vec<PricePoint> {
    let days = days.min(MAX_FALLBACK_DAYS);
    let mut rng = StdRng::seed_from_u64(seed);
    let base = profile.base_price;

    let mut series = Vec::with_capacity(days as usize + 1);
    for back in (0..=days).rev() {
        let offset = rng.gen_range(-PRICE_BAND..PRICE_BAND);
        let volume = rng.gen_range(MIN_VOLUME..MAX_VOLUME);
        let Some(date) = end_date.checked_sub_days(Days::new(u64::from(back))) else {
            continue;
        };
        series.push(PricePoint {
            date,
            price: (base * (1.0 + offset)).round(),
            volume,
        });
    }

    series
}
