//! Exchange-rate table loading.

use std::io::Read;

use log::{debug, info};

use crate::error_handling::ExchangeRateError;
use crate::fetch::{fetch_text, is_remote};
use crate::models::ExchangeRates;

const CURRENCY_COLUMN: &str = "Currency";
const RATE_COLUMN: &str = "Rate";

/// Loads the exchange-rate table from a local path or an http(s) URL.
///
/// # Errors
///
/// Returns `ExchangeRateError::Io` / `Fetch` if the source cannot be read,
/// and the parse errors of [`parse_exchange_rates`].
pub async fn load_exchange_rates(
    client: &reqwest::Client,
    source: &str,
) -> Result<ExchangeRates, ExchangeRateError> {
    let rates = if is_remote(source) {
        let body = fetch_text(client, source).await?;
        parse_exchange_rates(body.as_bytes())?
    } else {
        let bytes = tokio::fs::read(source)
            .await
            .map_err(|e| ExchangeRateError::Io {
                path: source.to_string(),
                source: e,
            })?;
        parse_exchange_rates(bytes.as_slice())?
    };
    info!("Loaded {} exchange rates from {}", rates.len(), source);
    Ok(rates)
}

/// Parses exchange-rate CSV.
///
/// The header must contain `Currency` and `Rate`; other columns (such as a
/// leading unnamed index column) are ignored. Later rows win on duplicate codes.
pub fn parse_exchange_rates<R: Read>(reader: R) -> Result<ExchangeRates, ExchangeRateError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let currency_idx = headers
        .iter()
        .position(|h| h == CURRENCY_COLUMN)
        .ok_or(ExchangeRateError::MissingColumn(CURRENCY_COLUMN))?;
    let rate_idx = headers
        .iter()
        .position(|h| h == RATE_COLUMN)
        .ok_or(ExchangeRateError::MissingColumn(RATE_COLUMN))?;

    let mut rates = ExchangeRates::new();
    for result in rdr.records() {
        let record = result?;
        let currency = record.get(currency_idx).unwrap_or_default();
        let raw = record.get(rate_idx).unwrap_or_default();
        let rate = raw
            .parse::<f64>()
            .map_err(|_| ExchangeRateError::InvalidRate {
                currency: currency.to_string(),
                raw: raw.to_string(),
            })?;
        debug!("Exchange rate {} = {}", currency, rate);
        rates.insert(currency, rate);
    }

    Ok(rates)
}
