//! Domain entities
//!
//! Pure models for the feed: the review items it accumulates, the credential
//! that scopes them, the controller's owned state and its read-only projection.

pub mod credential;
pub mod feed_kind;
pub mod feed_state;
pub mod review;
pub mod view_model;

pub use credential::Credential;
pub use feed_kind::FeedKind;
pub use feed_state::{FeedState, FetchTicket, Phase, SessionId};
pub use review::{ReviewId, ReviewSummary, VaccinationType, Writer};
pub use view_model::FeedViewModel;
