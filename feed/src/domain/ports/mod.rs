//! Domain ports (traits)
//!
//! Port traits define the collaborators a feed needs.
//! Adapters provide concrete implementations of these traits.

pub mod paged_fetch;
pub mod renderer;

pub use paged_fetch::PagedFetchService;
pub use renderer::FeedRenderer;
