use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// Transport failure surfaced by [`JsonFetcher::fetch_json`]. Connection
/// errors, non-success statuses and undecodable bodies all end up here,
/// untranslated.
#[derive(Debug, Error)]
#[error("GET {url} failed: {source}")]
pub struct FetchError {
    pub url: String,
    #[source]
    pub source: reqwest::Error,
}

impl FetchError {
    fn new(url: &str, source: reqwest::Error) -> Self {
        FetchError {
            url: url.to_string(),
            source,
        }
    }
}

/// The sole network boundary of the crate. Injected into the client so
/// tests can substitute a deterministic stub.
#[async_trait]
pub trait JsonFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// GETs a url and decodes the body as json. One request per call, no
/// retry, no recovery.
pub struct HttpJsonFetcher {
    client: Client,
}

impl HttpJsonFetcher {
    pub fn new(client: Client) -> Self {
        HttpJsonFetcher { client }
    }
}

#[async_trait]
impl JsonFetcher for HttpJsonFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::new(url, e))?
            .error_for_status()
            .map_err(|e| FetchError::new(url, e))?;

        response.json().await.map_err(|e| FetchError::new(url, e))
    }
}
