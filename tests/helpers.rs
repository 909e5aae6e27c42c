// Shared test helpers for pipeline integration tests.
//
// Builds archived-page fixtures, exchange-rate files and a Config whose
// outputs all live in one temporary directory.

use std::path::Path;

use banks_etl::{Config, LogFormat, LogLevel};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock server serves the bank page under.
pub const PAGE_PATH: &str = "/wiki/List_of_largest_banks";

/// One data row laid out like the archived page: rank, flag link plus bank
/// link, then the market cap followed by the newline that closes the cell.
pub fn bank_row(rank: u32, name: &str, market_cap: &str) -> String {
    format!(
        r#"<tr><td>{rank}</td><td><span class="flagicon"><a href="/wiki/Flag" title="Country"><img src="flag.png"></a></span> <a href="/wiki/{slug}" title="{name}">{name}</a></td><td>{market_cap}
</td></tr>"#,
        slug = name.replace(' ', "_"),
    )
}

/// A page whose first table body holds a header row followed by `rows`.
/// A second table is appended to check that only the first one is read.
pub fn bank_page(rows: &[String]) -> String {
    format!(
        r#"<html><body>
<table class="wikitable"><tbody>
<tr><th>Rank</th><th>Bank name</th><th>Market cap<br>(US$ billion)</th></tr>
{}
</tbody></table>
<table class="wikitable"><tbody>
<tr><td>1</td><td>Other table</td><td>1.0
</td></tr>
</tbody></table>
</body></html>"#,
        rows.join("\n")
    )
}

/// Ten banks in ranking order.
#[allow(dead_code)] // Used by other test files
pub fn ten_bank_rows() -> Vec<String> {
    [
        ("JPMorgan Chase", "432.92"),
        ("Bank of America", "231.52"),
        ("Industrial and Commercial Bank of China", "194.56"),
        ("Agricultural Bank of China", "160.68"),
        ("HDFC Bank", "157.91"),
        ("Wells Fargo", "155.87"),
        ("HSBC Holdings PLC", "148.90"),
        ("Morgan Stanley", "140.83"),
        ("China Construction Bank", "139.82"),
        ("Bank of China", "136.81"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (name, cap))| bank_row(i as u32 + 1, name, cap))
    .collect()
}

/// Starts a mock server that serves `html` under [`PAGE_PATH`].
pub async fn serve_page(html: String) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&server)
        .await;
    server
}

/// Writes an exchange-rate CSV with a leading unnamed index column.
pub fn write_rates(dir: &Path, rates: &[(&str, &str)]) -> String {
    let mut contents = String::from(",Currency,Rate\n");
    for (i, (currency, rate)) in rates.iter().enumerate() {
        contents.push_str(&format!("{},{},{}\n", i, currency, rate));
    }
    let rates_path = dir.join("exchange_rate.csv");
    std::fs::write(&rates_path, contents).expect("Failed to write exchange rate file");
    rates_path.to_string_lossy().to_string()
}

/// The usual GBP/EUR/INR rates.
#[allow(dead_code)] // Used by other test files
pub fn standard_rates() -> Vec<(&'static str, &'static str)> {
    vec![("EUR", "0.93"), ("GBP", "0.8"), ("INR", "82.95")]
}

/// Creates a Config with every output inside `dir`.
pub fn create_test_config(server: &MockServer, rates_source: String, dir: &TempDir) -> Config {
    Config {
        source_url: format!("{}{}", server.uri(), PAGE_PATH),
        exchange_rate_source: rates_source,
        csv_path: dir.path().join("Largest_banks_data.csv"),
        db_path: dir.path().join("Banks.db"),
        log_file: dir.path().join("code_log.txt"),
        timeout_seconds: 5,
        user_agent: "banks_etl_test/1.0".to_string(),
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}
