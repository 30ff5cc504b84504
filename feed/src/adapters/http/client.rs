//! Review API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::response::parse_page;
use crate::config::FeedConfig;
use crate::domain::entities::{Credential, FeedKind, ReviewSummary};
use crate::domain::ports::PagedFetchService;
use crate::error::{ConfigError, FetchError};

/// Paged review list client for one feed kind
pub struct ReviewApiClient {
    http: Client,
    base_url: String,
    feed: FeedKind,
}

impl ReviewApiClient {
    pub fn new(base_url: &str, feed: FeedKind, timeout: Duration) -> Result<Self, ConfigError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            feed,
        })
    }

    pub fn from_config(config: &FeedConfig) -> Result<Self, ConfigError> {
        Self::new(&config.api_url, config.feed, config.request_timeout)
    }

    pub fn feed(&self) -> FeedKind {
        self.feed
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    fn paging_url(&self) -> String {
        self.api_url("/posts/paging")
    }

    async fn handle_page_response(
        &self,
        response: reqwest::Response,
        page_size: usize,
    ) -> Result<Vec<ReviewSummary>, FetchError> {
        let status = response.status();
        let body = response.text().await.map_err(request_error)?;

        if status.is_success() {
            parse_page(&body, page_size)
        } else {
            Err(FetchError::from_status(status.as_u16(), body))
        }
    }
}

fn request_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Request(e)
    }
}

#[async_trait]
impl PagedFetchService for ReviewApiClient {
    type Item = ReviewSummary;

    async fn fetch_page(
        &self,
        credential: &Credential,
        offset: usize,
        page_size: usize,
    ) -> Result<Vec<ReviewSummary>, FetchError> {
        debug!(feed = %self.feed, offset, page_size, "GET review page");

        let response = self
            .http
            .get(self.paging_url())
            .bearer_auth(credential.expose())
            .query(&[
                ("filter", self.feed.api_filter().to_string()),
                ("offset", offset.to_string()),
                ("size", page_size.to_string()),
            ])
            .send()
            .await
            .map_err(request_error)?;

        self.handle_page_response(response, page_size).await
    }
}
