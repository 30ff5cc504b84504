//! Paged fetch port trait
//!
//! The remote service that returns one page of a user-scoped feed.

use async_trait::async_trait;

use crate::domain::entities::Credential;
use crate::error::FetchError;

/// Source of feed pages
///
/// Implementations must be safe to call once per offset. The feed never
/// calls a service concurrently for the same session.
#[async_trait]
pub trait PagedFetchService: Send + Sync {
    type Item: Send + 'static;

    /// Fetch up to `page_size` items starting at `offset`.
    ///
    /// A page shorter than `page_size` means there is nothing further.
    async fn fetch_page(
        &self,
        credential: &Credential,
        offset: usize,
        page_size: usize,
    ) -> Result<Vec<Self::Item>, FetchError>;
}
