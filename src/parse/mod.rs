//! HTML parsing for the source page.
//!
//! The source is the "By market capitalization" table of the archived
//! Wikipedia list of largest banks. The first `<tbody>` in the page is that
//! table; its layout is assumed stable, so any deviation is a hard error.

mod table;

pub use table::{parse_bank_table, parse_market_cap};
