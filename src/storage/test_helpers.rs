//! Shared test helpers for storage module tests.

#[cfg(test)]
use crate::models::EnrichedBankRecord;
#[cfg(test)]
use crate::storage::Store;

/// Opens a private in-memory store.
#[cfg(test)]
pub async fn create_test_store() -> Store {
    Store::open_in_memory()
        .await
        .expect("Failed to open in-memory database")
}

/// Six banks in source-table order, with already-rounded conversions.
#[cfg(test)]
pub fn sample_records() -> Vec<EnrichedBankRecord> {
    [
        ("JPMorgan Chase", 432.92, 346.34, 402.62, 35910.71),
        ("Bank of America", 231.52, 185.22, 215.31, 19204.58),
        ("Industrial and Commercial Bank of China", 194.56, 155.65, 180.94, 16138.75),
        ("Agricultural Bank of China", 160.68, 128.54, 149.43, 13328.41),
        ("HDFC Bank", 157.91, 126.33, 146.86, 13098.63),
        ("Wells Fargo", 155.87, 124.7, 144.96, 12929.42),
    ]
    .into_iter()
    .map(|(name, usd, gbp, eur, inr)| EnrichedBankRecord {
        name: name.to_string(),
        mc_usd_billion: usd,
        mc_gbp_billion: gbp,
        mc_eur_billion: eur,
        mc_inr_billion: inr,
    })
    .collect()
}
