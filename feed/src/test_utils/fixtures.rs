//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::NaiveDate;

use crate::domain::entities::{Credential, ReviewId, ReviewSummary, VaccinationType, Writer};

/// Credential of the default test user
pub fn test_credential() -> Credential {
    Credential::new("test-access-token")
}

/// Credential of a named test user
pub fn test_credential_for(user: &str) -> Credential {
    Credential::new(format!("access-token-{}", user))
}

/// Create a test review with the given id
pub fn test_review(id: i64) -> ReviewSummary {
    let created_at = NaiveDate::from_ymd_opt(2021, 7, 13)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .unwrap();

    ReviewSummary {
        id: ReviewId(id),
        writer: Writer {
            id: 1,
            nickname: "test-writer".to_string(),
            social_profile_url: None,
        },
        content: format!("review {}", id),
        vaccination_type: VaccinationType::Pfizer,
        view_count: 0,
        like_count: 1,
        comment_count: 0,
        has_liked: true,
        created_at,
    }
}

/// `count` consecutive reviews with ids starting at `start`
pub fn test_reviews(start: usize, count: usize) -> Vec<ReviewSummary> {
    (start..start + count).map(|id| test_review(id as i64)).collect()
}
