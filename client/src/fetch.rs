//! The fetch step: one `GET {origin}/api`, body parsed as JSON.

use reqwest::Client;
use thiserror::Error;
use timeview_types::Payload;
use url::Url;

/// Path of the clock endpoint, relative to the page origin.
pub const API_PATH: &str = "/api";

/// Failures of the fetch step. None are retried or recovered.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The origin URL cannot carry the `/api` path.
    #[error("cannot resolve /api against origin: {0}")]
    Url(#[from] url::ParseError),

    /// Transport-level failure before the exchange completed.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The exchange completed but the body is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Body(#[source] reqwest::Error),
}

/// Issue exactly one `GET` to `{origin}/api` and parse the body as a
/// [`Payload`].
///
/// The status code is never inspected: any completed exchange proceeds to the
/// JSON parse, exactly like chaining `resp.json()` off a browser fetch. No
/// timeout, no retry, no request headers beyond the client's defaults.
pub async fn fetch_payload(client: &Client, origin: &Url) -> Result<Payload, FetchError> {
    let url = origin.join(API_PATH)?;

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(FetchError::Request)?;
    tracing::trace!(url = %url, status = %response.status(), "exchange completed");

    response.json::<Payload>().await.map_err(FetchError::Body)
}
