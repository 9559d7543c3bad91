pub mod catalog;
pub mod fallback;
pub mod overview;
pub mod snapshot;

pub use catalog::{build_catalog, search, CatalogEntry};
pub use fallback::synthesize_series;
pub use overview::{change_rate, IndexQuote, MarketOverview};
pub use snapshot::{MarketSnapshot, StockQuote};
