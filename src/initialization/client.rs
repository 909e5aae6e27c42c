//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Maximum redirect hops followed when fetching the source page.
/// The Wayback Machine redirects between snapshot timestamps.
const MAX_REDIRECTS: usize = 10;

/// Initializes the HTTP client used for the page and exchange-rate fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Timeout from the configuration
/// - Redirect following enabled (up to 10 hops)
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()?;
    Ok(client)
}
