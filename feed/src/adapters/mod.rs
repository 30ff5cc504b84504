//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod http;

pub use http::ReviewApiClient;
