use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::DomainError;

/// HTTP client with reqwest's defaults, falling back to `Client::default()`
/// when the builder cannot initialise its TLS backend.
pub(crate) fn default_client() -> reqwest::Client {
    reqwest::Client::builder().build().unwrap_or_default()
}

/// Send one request and decode a 200 body as `T`.
///
/// Any other status is logged and reported as `Ok(None)`. Connection
/// failures map to [`DomainError::Transport`], undecodable bodies to
/// [`DomainError::ParseError`].
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    origin: &str,
) -> Result<Option<T>, DomainError> {
    let response = send(request, origin).await?;
    read_json(response, origin).await
}

async fn send(request: RequestBuilder, origin: &str) -> Result<Response, DomainError> {
    let response = request
        .send()
        .await
        .map_err(|e| DomainError::transport(format!("{origin}: request failed: {e}")))?;
    debug!("{origin}: {} {}", response.status(), response.url());
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    origin: &str,
) -> Result<Option<T>, DomainError> {
    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        warn!("{origin}: API returned {status}: {body}");
        return Ok(None);
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| DomainError::transport(format!("{origin}: failed to read response: {e}")))?;

    serde_json::from_slice(&body)
        .map(Some)
        .map_err(|e| DomainError::parse(format!("{origin}: failed to parse response: {e}")))
}
