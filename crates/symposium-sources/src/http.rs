//! Shared HTTP plumbing for the source adapters

use crate::{SourceError, SourcesConfig};
use serde::de::DeserializeOwned;
use tracing::trace;

/// Build the pooled client every adapter shares
pub(crate) fn build_client(config: &SourcesConfig) -> Result<reqwest::Client, SourceError> {
    reqwest::Client::builder()
        .timeout(config.request_timeout())
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| SourceError::Config(format!("Failed to build HTTP client: {}", e)))
}

async fn send(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<reqwest::Response, SourceError> {
    trace!(url, "Source request");
    let response = client.get(url).query(query).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response)
}

/// GET a JSON document
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, SourceError> {
    let response = send(client, url, query).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| SourceError::InvalidResponse(format!("{}: {}", url, e)))
}

/// GET a plain-text body
pub(crate) async fn get_text(client: &reqwest::Client, url: &str) -> Result<String, SourceError> {
    let response = send(client, url, &[]).await?;
    Ok(response.text().await?)
}
