//! Review domain entity
//!
//! A short vaccination review as it appears in a feed.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Unique identifier for a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReviewId(pub i64);

impl From<i64> for ReviewId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vaccine the review is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VaccinationType {
    Pfizer,
    Moderna,
    #[serde(rename = "ASTRAZENECA")]
    AstraZeneca,
    Janssen,
    Unknown,
}

impl VaccinationType {
    /// Korean display label used by the review list
    pub fn label(&self) -> &'static str {
        match self {
            VaccinationType::Pfizer => "화이자",
            VaccinationType::Moderna => "모더나",
            VaccinationType::AstraZeneca => "아스트라제네카",
            VaccinationType::Janssen => "얀센",
            VaccinationType::Unknown => "기타",
        }
    }
}

impl std::fmt::Display for VaccinationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VaccinationType::Pfizer => write!(f, "PFIZER"),
            VaccinationType::Moderna => write!(f, "MODERNA"),
            VaccinationType::AstraZeneca => write!(f, "ASTRAZENECA"),
            VaccinationType::Janssen => write!(f, "JANSSEN"),
            VaccinationType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl std::str::FromStr for VaccinationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PFIZER" => Ok(VaccinationType::Pfizer),
            "MODERNA" => Ok(VaccinationType::Moderna),
            "ASTRAZENECA" => Ok(VaccinationType::AstraZeneca),
            "JANSSEN" => Ok(VaccinationType::Janssen),
            "UNKNOWN" => Ok(VaccinationType::Unknown),
            _ => Err(format!("Unknown vaccination type: {}", s)),
        }
    }
}

/// Author of a review
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Writer {
    pub id: i64,
    pub nickname: String,
    pub social_profile_url: Option<String>,
}

/// A review as shown in a feed. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub id: ReviewId,
    pub writer: Writer,
    pub content: String,
    pub vaccination_type: VaccinationType,
    pub view_count: u32,
    pub like_count: u32,
    pub comment_count: u32,
    /// Whether the requesting user has liked this review
    pub has_liked: bool,
    pub created_at: NaiveDateTime,
}

impl ReviewSummary {
    /// First `max_lines` lines of the content, for list previews
    pub fn preview(&self, max_lines: usize) -> String {
        self.content
            .lines()
            .take(max_lines)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
