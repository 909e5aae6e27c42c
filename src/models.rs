//! Records flowing through the pipeline.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::error_handling::MissingRateError;

/// One row of the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRecord {
    /// Bank name, from the bank link's title
    #[serde(rename = "Name")]
    pub name: String,
    /// Market capitalization in billion USD
    #[serde(rename = "MC_USD_Billion")]
    pub mc_usd_billion: f64,
}

impl BankRecord {
    /// Column names in serialization order.
    pub const COLUMNS: [&'static str; 2] = ["Name", "MC_USD_Billion"];
}

/// A bank record with market cap converted to every target currency.
///
/// This is the terminal representation written by both loaders; field order
/// here is the CSV column order and the SQL column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedBankRecord {
    /// Bank name
    #[serde(rename = "Name")]
    pub name: String,
    /// Market cap in billion USD, as extracted
    #[serde(rename = "MC_USD_Billion")]
    pub mc_usd_billion: f64,
    /// Market cap in billion GBP, rounded to two decimals
    #[serde(rename = "MC_GBP_Billion")]
    pub mc_gbp_billion: f64,
    /// Market cap in billion EUR, rounded to two decimals
    #[serde(rename = "MC_EUR_Billion")]
    pub mc_eur_billion: f64,
    /// Market cap in billion INR, rounded to two decimals
    #[serde(rename = "MC_INR_Billion")]
    pub mc_inr_billion: f64,
}

impl EnrichedBankRecord {
    /// Column names in serialization order.
    pub const COLUMNS: [&'static str; 5] = [
        "Name",
        "MC_USD_Billion",
        "MC_GBP_Billion",
        "MC_EUR_Billion",
        "MC_INR_Billion",
    ];
}

/// Currencies the transform stage derives columns for.
///
/// The set is fixed; extra codes present in the exchange-rate table are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    /// Pound sterling
    Gbp,
    /// Euro
    Eur,
    /// Indian rupee
    Inr,
}

/// Currency code to USD multiplier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeRates {
    rates: HashMap<String, f64>,
}

impl ExchangeRates {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rate for `code`, replacing any previous value.
    pub fn insert(&mut self, code: impl Into<String>, rate: f64) {
        self.rates.insert(code.into(), rate);
    }

    /// Rate for an arbitrary currency code.
    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Rate for one of the target currencies.
    pub fn rate(&self, currency: Currency) -> Result<f64, MissingRateError> {
        self.get(&currency.to_string())
            .ok_or(MissingRateError { currency })
    }

    /// Number of currency codes in the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True when no rates were loaded.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ExchangeRates {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
