// ---------------------------------------------------------------------------
// Stock catalogue -- searchable list of known codes
// ---------------------------------------------------------------------------

use serde::Serialize;

use crate::market_data::snapshot::MarketSnapshot;
use crate::runtime_config::RuntimeConfig;

/// Queries shorter than this (after trimming) match nothing.
pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub code: String,
    pub name: String,
    pub market: String,
}

/// Build the catalogue from the snapshot's quotes plus configured profiles.
///
/// Snapshot entries come first; a configured profile is only added when the
/// snapshot does not already list its code.
pub fn build_catalog(config: &RuntimeConfig, snapshot: Option<&MarketSnapshot>) -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = snapshot
        .map(|snap| {
            snap.stocks
                .iter()
                .map(|q| CatalogEntry {
                    code: q.code.clone(),
                    name: q.name.clone(),
                    market: q.market.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    for (code, profile) in &config.profiles {
        if entries.iter().any(|e| &e.code == code) {
            continue;
        }
        entries.push(CatalogEntry {
            code: code.clone(),
            name: profile.name.clone(),
            market: profile.market.clone(),
        });
    }

    entries
}

/// Case-insensitive name match or code substring match.
pub fn search<'a>(catalog: &'a [CatalogEntry], query: &str) -> Vec<&'a CatalogEntry> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&needle) || e.code.contains(query))
        .collect()
}
