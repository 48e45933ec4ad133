//! Fetching stylesheets over HTTP.

use std::time::Duration;

use crate::CssError;

/// User-Agent header sent with every request.
const USER_AGENT: &str = concat!("stylekit/", env!("CARGO_PKG_VERSION"));

/// Default request timeout.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches a URI and returns its body as text.
///
/// # Errors
///
/// Returns [`CssError::Fetch`] if the client cannot be built, the request
/// fails, the response status is not a success, or the body cannot be read.
pub fn fetch_text(uri: &str) -> Result<String, CssError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| CssError::Fetch(format!("failed to create HTTP client: {e}")))?;

    let response = client
        .get(uri)
        .send()
        .map_err(|e| CssError::Fetch(format!("request to {uri} failed: {e}")))?;

    if !response.status().is_success() {
        return Err(CssError::Fetch(format!(
            "HTTP error from {uri}: {}",
            response.status()
        )));
    }

    response
        .text()
        .map_err(|e| CssError::Fetch(format!("failed to read response body: {e}")))
}
