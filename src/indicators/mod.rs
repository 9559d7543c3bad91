// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators drawn on the price
// chart.  Series functions are chart-aligned (one `Option` slot per input
// price); point functions return `Option<T>` so callers handle insufficient
// history explicitly.

pub mod bollinger;
pub mod moving_average;
pub mod rsi;
pub mod summary;

pub use bollinger::{bollinger_bands, latest_bollinger, BollingerBands, BollingerResult};
pub use moving_average::{latest_moving_average, moving_average};
pub use rsi::{relative_strength_index, relative_strength_index_default, rsi_zone};
pub use summary::{price_summary, PriceSummary};
