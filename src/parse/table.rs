//! Bank table extraction.

use std::num::ParseFloatError;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error_handling::ParseError;
use crate::models::BankRecord;

const TBODY_SELECTOR_STR: &str = "tbody";
const ROW_SELECTOR_STR: &str = "tr";
const CELL_SELECTOR_STR: &str = "td";
const LINK_SELECTOR_STR: &str = "a";

/// Data cells a qualifying row must have (rank, name, market cap).
const REQUIRED_CELLS: usize = 3;
const NAME_CELL: usize = 1;
const MARKET_CAP_CELL: usize = 2;
/// The name cell holds a flag link followed by the bank link.
const BANK_LINK_INDEX: usize = 1;

fn static_selector(selector_str: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}': {}. This is a programming error.",
            selector_str, e
        )
    })
}

static TBODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| static_selector(TBODY_SELECTOR_STR));
static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| static_selector(ROW_SELECTOR_STR));
static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| static_selector(CELL_SELECTOR_STR));
static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| static_selector(LINK_SELECTOR_STR));

/// Parses the first table body of `html` into bank records.
///
/// Rows without any `<td>` (header rows) are skipped. Every other row must
/// have the expected layout; the first row that does not aborts parsing.
/// Records are returned in document order.
///
/// # Errors
///
/// - `ParseError::MissingTableBody` if the page has no `<tbody>`
/// - `ParseError::MissingCell` if a data row has fewer than three cells
/// - `ParseError::MissingBankName` if the name cell lacks a second titled link
/// - `ParseError::MissingMarketCap` / `InvalidMarketCap` for a bad market cap cell
pub fn parse_bank_table(html: &str) -> Result<Vec<BankRecord>, ParseError> {
    let document = Html::parse_document(html);
    let tbody = document
        .select(&TBODY_SELECTOR)
        .next()
        .ok_or(ParseError::MissingTableBody)?;

    let rows: Vec<ElementRef> = tbody.select(&ROW_SELECTOR).collect();
    log::debug!("Found {} rows in first table body", rows.len());

    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let cells: Vec<ElementRef> = row.select(&CELL_SELECTOR).collect();
        if cells.is_empty() {
            continue;
        }
        records.push(parse_bank_row(index + 1, &cells)?);
    }

    Ok(records)
}

fn parse_bank_row(row: usize, cells: &[ElementRef]) -> Result<BankRecord, ParseError> {
    if cells.len() < REQUIRED_CELLS {
        return Err(ParseError::MissingCell {
            row,
            expected: REQUIRED_CELLS,
            found: cells.len(),
        });
    }

    let name = cells[NAME_CELL]
        .select(&LINK_SELECTOR)
        .nth(BANK_LINK_INDEX)
        .and_then(|link| link.value().attr("title"))
        .ok_or(ParseError::MissingBankName { row })?
        .to_string();

    // Only the cell's leading text node counts, not text nested in child elements
    let raw = cells[MARKET_CAP_CELL]
        .children()
        .next()
        .and_then(|node| node.value().as_text())
        .map(|text| String::from(&**text))
        .ok_or(ParseError::MissingMarketCap { row })?;

    let mc_usd_billion =
        parse_market_cap(&raw).map_err(|source| ParseError::InvalidMarketCap {
            row,
            raw: raw.clone(),
            source,
        })?;

    Ok(BankRecord {
        name,
        mc_usd_billion,
    })
}

/// Parses a market cap cell's text.
///
/// Assumes the text ends in exactly one suffix character (on the source page,
/// the newline that closes the cell) and drops it unconditionally. The rest,
/// with surrounding whitespace trimmed, must be a plain decimal number; no
/// thousands separators or currency symbols are accepted.
pub fn parse_market_cap(raw: &str) -> Result<f64, ParseFloatError> {
    let mut chars = raw.chars();
    chars.next_back();
    chars.as_str().trim().parse::<f64>()
}
