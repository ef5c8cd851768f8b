//! HTTP implementation of the chain-retrieval collaborator.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use shared::{domain::ChainRecord, protocol::ChainsResponse};
use url::Url;

use crate::ChainFetcher;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct ChainsQuery<'a> {
    url: &'a str,
}

/// Retrieves chains with one GET per submission against the backend's
/// `api/chains` endpoint, passing the hadith URL as a query parameter.
pub struct HttpChainFetcher {
    http: Client,
    endpoint: Url,
}

impl HttpChainFetcher {
    pub fn new(api_base_url: &str) -> Result<Self> {
        Self::with_timeout(api_base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(api_base_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(api_base_url)
            .with_context(|| format!("invalid API base url: {api_base_url}"))?;
        let endpoint = base
            .join("api/chains")
            .with_context(|| format!("cannot derive chains endpoint from {api_base_url}"))?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl ChainFetcher for HttpChainFetcher {
    async fn fetch_chains(&self, url: &str) -> Result<Vec<ChainRecord>> {
        let response: ChainsResponse = self
            .http
            .get(self.endpoint.clone())
            .query(&ChainsQuery { url })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.chains)
    }
}
