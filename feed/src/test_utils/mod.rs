//! Test utilities
//!
//! Hand-written in-memory doubles and fixtures for unit testing.
//! The doubles record what the feed asked for so tests can assert on it,
//! and the fetch service can hold responses back to keep a fetch in flight.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
