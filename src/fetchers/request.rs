use log::debug;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::error::ReadError;

/// A page body together with the URL it was finally served from
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: Url,
    pub html: String,
}

#[derive(Debug, Clone)]
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    /// Create a fetcher. `timeout` of `None` means requests never time out.
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> Result<Self, ReadError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ReadError::Builder(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// GET `url`, following redirects. Non-success statuses are errors.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, ReadError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let final_url = response.url().clone();
        debug!("fetched {} (final URL {})", url, final_url);

        let html = response.text().await?;
        Ok(FetchedPage {
            url: final_url,
            html,
        })
    }
}
