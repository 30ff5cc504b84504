//! Review API response shapes
//!
//! The service answers with loosely typed JSON. Everything is checked here
//! and turned into [`ReviewSummary`] values before it reaches the feed.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::domain::entities::{ReviewId, ReviewSummary, VaccinationType, Writer};
use crate::error::FetchError;

/// Author as sent by the API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriterResponse {
    pub id: i64,
    pub nickname: String,
    #[serde(default)]
    pub social_profile_url: Option<String>,
}

/// One review as sent by the API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: i64,
    /// Older API versions call this `user`
    #[serde(alias = "user")]
    pub writer: WriterResponse,
    pub content: String,
    pub vaccination_type: String,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub comment_count: i64,
    #[serde(default)]
    pub has_liked: bool,
    pub created_at: NaiveDateTime,
}

impl TryFrom<ReviewResponse> for ReviewSummary {
    type Error = FetchError;

    fn try_from(raw: ReviewResponse) -> Result<Self, Self::Error> {
        if raw.id <= 0 {
            return Err(FetchError::Malformed(format!("invalid review id {}", raw.id)));
        }

        let vaccination_type = raw.vaccination_type.parse().unwrap_or_else(|_| {
            tracing::warn!(
                review_id = raw.id,
                vaccination_type = %raw.vaccination_type,
                "unrecognized vaccination type"
            );
            VaccinationType::Unknown
        });

        Ok(ReviewSummary {
            id: ReviewId(raw.id),
            writer: Writer {
                id: raw.writer.id,
                nickname: raw.writer.nickname,
                social_profile_url: raw.writer.social_profile_url,
            },
            content: raw.content,
            vaccination_type,
            view_count: count(raw.id, "viewCount", raw.view_count)?,
            like_count: count(raw.id, "likeCount", raw.like_count)?,
            comment_count: count(raw.id, "commentCount", raw.comment_count)?,
            has_liked: raw.has_liked,
            created_at: raw.created_at,
        })
    }
}

fn count(review_id: i64, field: &str, value: i64) -> Result<u32, FetchError> {
    u32::try_from(value).map_err(|_| {
        FetchError::Malformed(format!("review {}: {} out of range: {}", review_id, field, value))
    })
}

/// Parse a page body into reviews, rejecting anything that is not an array
/// of at most `page_size` well-formed reviews
pub fn parse_page(body: &str, page_size: usize) -> Result<Vec<ReviewSummary>, FetchError> {
    let raw: Vec<ReviewResponse> =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    if raw.len() > page_size {
        return Err(FetchError::Malformed(format!(
            "page has {} reviews, requested at most {}",
            raw.len(),
            page_size
        )));
    }
    raw.into_iter().map(ReviewSummary::try_from).collect()
}
