use std::env;
use std::num::NonZeroUsize;
use std::time::Duration;

use crate::domain::entities::{Credential, FeedKind};
use crate::error::ConfigError;

/// Page size used by the review lists
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL of the review API
    pub api_url: String,
    /// Access token from the social login, if the user is signed in
    pub access_token: Option<Credential>,
    pub page_size: NonZeroUsize,
    pub feed: FeedKind,
    /// Per-request timeout applied by the HTTP adapter
    pub request_timeout: Duration,
}

impl FeedConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("CVI_API_URL").unwrap_or_else(|| "http://localhost:8080".to_string());

        let access_token = lookup("CVI_ACCESS_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .map(Credential::new);

        let page_size = match lookup("CVI_PAGE_SIZE") {
            Some(value) => value
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|e| ConfigError::Invalid {
                    key: "CVI_PAGE_SIZE",
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
        };

        let feed = match lookup("CVI_FEED") {
            Some(value) => value
                .parse::<FeedKind>()
                .map_err(|reason| ConfigError::Invalid {
                    key: "CVI_FEED",
                    value: value.clone(),
                    reason,
                })?,
            None => FeedKind::Likes,
        };

        let timeout_secs = match lookup("CVI_REQUEST_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::Invalid {
                    key: "CVI_REQUEST_TIMEOUT_SECS",
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            access_token,
            page_size,
            feed,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
