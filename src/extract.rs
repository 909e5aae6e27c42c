//! Extraction stage: source page to bank records.

use log::info;

use crate::error_handling::ExtractError;
use crate::fetch::fetch_text;
use crate::models::BankRecord;
use crate::parse::parse_bank_table;

/// Fetches `source_url` and parses its first table body into bank records.
///
/// `expected_columns` names the columns the caller expects, in order; it must
/// match [`BankRecord::COLUMNS`]. Row order of the page is preserved.
///
/// # Errors
///
/// - `ExtractError::ColumnMismatch` before any request if the columns differ
/// - `ExtractError::Fetch` if the page cannot be retrieved
/// - `ExtractError::Parse` if the page does not have the expected table layout
pub async fn extract<S: AsRef<str>>(
    client: &reqwest::Client,
    source_url: &str,
    expected_columns: &[S],
) -> Result<Vec<BankRecord>, ExtractError> {
    let expected: Vec<&str> = expected_columns.iter().map(AsRef::as_ref).collect();
    if expected != BankRecord::COLUMNS {
        return Err(ExtractError::ColumnMismatch {
            expected: expected.iter().map(|c| c.to_string()).collect(),
            actual: BankRecord::COLUMNS.iter().map(|c| c.to_string()).collect(),
        });
    }

    let html = fetch_text(client, source_url).await?;
    let records = parse_bank_table(&html)?;
    info!("Extracted {} bank records from {}", records.len(), source_url);
    Ok(records)
}
