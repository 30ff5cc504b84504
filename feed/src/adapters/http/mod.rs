//! Review API adapter
//!
//! Pages through the review service over HTTP.

mod client;
mod response;

pub use client::ReviewApiClient;
pub use response::{parse_page, ReviewResponse, WriterResponse};
