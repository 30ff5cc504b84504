//! Application layer
//!
//! The feed controller state machine and the adapters that drive it.

pub mod feed_controller;
pub mod feed_session;
pub mod sentinel;

pub use feed_controller::{FeedController, FetchRequest};
pub use feed_session::{FeedHandle, FeedSession};
pub use sentinel::SentinelTracker;
