//! Transformation stage: currency conversion of market caps.

mod rates;

pub use rates::{load_exchange_rates, parse_exchange_rates};

use crate::error_handling::MissingRateError;
use crate::models::{BankRecord, Currency, EnrichedBankRecord, ExchangeRates};

/// Converts every record's USD market cap into GBP, EUR and INR.
///
/// All three rates are looked up before any record is converted, so a table
/// missing one fails without producing partial output. Order is preserved.
pub fn transform(
    records: Vec<BankRecord>,
    rates: &ExchangeRates,
) -> Result<Vec<EnrichedBankRecord>, MissingRateError> {
    let gbp = rates.rate(Currency::Gbp)?;
    let eur = rates.rate(Currency::Eur)?;
    let inr = rates.rate(Currency::Inr)?;

    Ok(records
        .into_iter()
        .map(|record| EnrichedBankRecord {
            mc_gbp_billion: round_to_cents(record.mc_usd_billion * gbp),
            mc_eur_billion: round_to_cents(record.mc_usd_billion * eur),
            mc_inr_billion: round_to_cents(record.mc_usd_billion * inr),
            name: record.name,
            mc_usd_billion: record.mc_usd_billion,
        })
        .collect())
}

/// Rounds to two decimals: scale by 100, round half to even, scale back.
///
/// Ties are judged on the scaled binary value, so inputs like `2.675` (stored
/// as 2.67499...) round down.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
