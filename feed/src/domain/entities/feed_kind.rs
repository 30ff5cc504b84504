//! Feed kinds
//!
//! Which list of reviews a feed pages through.

use serde::{Deserialize, Serialize};

use crate::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    /// Reviews the user has liked
    Likes,
    /// Reviews the user wrote
    Mine,
    /// Every review
    All,
}

impl FeedKind {
    /// Value of the review API's `filter` query parameter
    pub fn api_filter(&self) -> &'static str {
        match self {
            FeedKind::Likes => "LIKES",
            FeedKind::Mine => "WRITER",
            FeedKind::All => "NONE",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FeedKind::Likes => messages::TITLE_LIKED_REVIEWS,
            FeedKind::Mine => messages::TITLE_MY_REVIEWS,
            FeedKind::All => messages::TITLE_ALL_REVIEWS,
        }
    }

    /// Shown when the feed loaded and came back empty
    pub fn empty_message(&self) -> &'static str {
        match self {
            FeedKind::Likes => messages::EMPTY_LIKED_REVIEWS,
            FeedKind::Mine => messages::EMPTY_MY_REVIEWS,
            FeedKind::All => messages::EMPTY_ALL_REVIEWS,
        }
    }
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::Likes => write!(f, "likes"),
            FeedKind::Mine => write!(f, "mine"),
            FeedKind::All => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for FeedKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "likes" => Ok(FeedKind::Likes),
            "mine" => Ok(FeedKind::Mine),
            "all" => Ok(FeedKind::All),
            _ => Err(format!("Unknown feed kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_kind_from_str() {
        assert_eq!("likes".parse::<FeedKind>().unwrap(), FeedKind::Likes);
        assert_eq!("MINE".parse::<FeedKind>().unwrap(), FeedKind::Mine);
        assert_eq!("All".parse::<FeedKind>().unwrap(), FeedKind::All);
        assert!("popular".parse::<FeedKind>().is_err());
    }

    #[test]
    fn liked_feed_copy() {
        assert_eq!(FeedKind::Likes.title(), "좋아요 누른 글");
        assert_eq!(FeedKind::Likes.empty_message(), "좋아요 누른 글이 없습니다");
        assert_eq!(FeedKind::Likes.api_filter(), "LIKES");
    }
}
