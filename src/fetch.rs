//! HTTP document retrieval.

use log::debug;
use url::Url;

use crate::error_handling::FetchError;

/// Returns true if `source` should be fetched over HTTP rather than read from disk.
pub fn is_remote(source: &str) -> bool {
    let lower = source.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Fetches `url` and returns the response body as text.
///
/// A single GET is issued; there is no retry. Non-2xx responses are errors.
///
/// # Errors
///
/// - `FetchError::InvalidUrl` / `UnsupportedScheme` if `url` is not an http(s) URL
/// - `FetchError::Request` on connection, timeout or body-decoding failure
/// - `FetchError::Status` on a non-success HTTP status
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::UnsupportedScheme {
            url: url.to_string(),
            scheme: parsed.scheme().to_string(),
        });
    }

    debug!("GET {}", parsed);
    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;
    debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
