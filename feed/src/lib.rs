//! CVI review feed
//!
//! Infinite-scroll pagination for the vaccination review lists: a pure feed
//! controller state machine, the tokio session that drives it, and a review
//! API adapter. Uses hexagonal (ports & adapters) architecture so the
//! controller never depends on a UI framework or HTTP stack.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod messages;

#[cfg(test)]
mod test_utils;

pub use adapters::ReviewApiClient;
pub use app::{FeedController, FeedHandle, FeedSession, FetchRequest, SentinelTracker};
pub use config::FeedConfig;
pub use domain::entities::{
    Credential, FeedKind, FeedState, FeedViewModel, FetchTicket, Phase, ReviewId, ReviewSummary,
    SessionId, VaccinationType, Writer,
};
pub use domain::ports::{FeedRenderer, PagedFetchService};
pub use error::{ConfigError, FetchError, FetchFailure, SessionError};
