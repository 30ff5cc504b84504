//! Console rendering of a review feed
//!
//! Prints each review once, as it arrives, followed by a status line for
//! loading, empty, error and end-of-list states.

use std::sync::Mutex;

use cvi_feed::messages;
use cvi_feed::{FeedKind, FeedRenderer, FeedViewModel, Phase, ReviewSummary};

/// Lines of review content shown per item
const PREVIEW_LINES: usize = 3;

pub struct ConsoleRenderer {
    feed: FeedKind,
    /// Items already printed in the current dataset
    printed: Mutex<usize>,
}

impl ConsoleRenderer {
    pub fn new(feed: FeedKind) -> Self {
        Self {
            feed,
            printed: Mutex::new(0),
        }
    }

    /// Lines to print for a view, given how many items were printed before.
    ///
    /// Returns the lines and the new printed count.
    fn lines_for(
        &self,
        view: &FeedViewModel<'_, ReviewSummary>,
        printed: usize,
    ) -> (Vec<String>, usize) {
        let mut lines = Vec::new();

        // The dataset was reset (new credential); start over
        let printed = if view.items.len() < printed { 0 } else { printed };
        if view.is_initial_loading {
            lines.push(format!("== {} ==", self.feed.title()));
        }

        for (index, review) in view.items.iter().enumerate().skip(printed) {
            lines.push(format_review(index, review));
        }

        match view.phase {
            Phase::Idle => lines.push(messages::NEED_LOGIN.to_string()),
            Phase::InitialLoading | Phase::IncrementalLoading => {
                lines.push("...".to_string())
            }
            Phase::Exhausted if view.is_empty => {
                lines.push(self.feed.empty_message().to_string())
            }
            Phase::Exhausted => lines.push("--".to_string()),
            Phase::Errored => {
                lines.push(format!("{} (retry)", messages::FAIL_TO_GET_REVIEW_LIST))
            }
            Phase::Ready => {}
        }

        (lines, view.items.len())
    }
}

fn format_review(index: usize, review: &ReviewSummary) -> String {
    let mark = if review.has_liked { "♥" } else { "♡" };
    format!(
        "{:>3}. [{}] {} · {}\n     {}\n     {} {}  조회 {}  댓글 {}",
        index + 1,
        review.vaccination_type.label(),
        review.writer.nickname,
        review.created_at.format("%Y.%m.%d"),
        review.preview(PREVIEW_LINES).replace('\n', "\n     "),
        mark,
        review.like_count,
        review.view_count,
        review.comment_count,
    )
}

impl FeedRenderer<ReviewSummary> for ConsoleRenderer {
    fn render(&self, view: &FeedViewModel<'_, ReviewSummary>) {
        let mut printed = match self.printed.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let (lines, count) = self.lines_for(view, *printed);
        *printed = count;
        for line in lines {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use cvi_feed::{FeedState, ReviewId, VaccinationType, Writer};

    use super::*;

    fn review(id: i64) -> ReviewSummary {
        ReviewSummary {
            id: ReviewId(id),
            writer: Writer {
                id: 1,
                nickname: "writer".to_string(),
                social_profile_url: None,
            },
            content: format!("review {}", id),
            vaccination_type: VaccinationType::Moderna,
            view_count: 3,
            like_count: 1,
            comment_count: 0,
            has_liked: true,
            created_at: "2021-07-13T10:00:00".parse::<NaiveDateTime>().unwrap(),
        }
    }

    fn state(phase: Phase, ids: &[i64]) -> FeedState<ReviewSummary> {
        let mut state = FeedState::new();
        state.phase = phase;
        state.items = ids.iter().map(|id| review(*id)).collect();
        state
    }

    #[test]
    fn prints_only_new_items() {
        let renderer = ConsoleRenderer::new(FeedKind::Likes);
        let state = state(Phase::Ready, &[1, 2, 3]);
        let view = FeedViewModel::project(&state);

        let (lines, count) = renderer.lines_for(&view, 2);

        assert_eq!(count, 3);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("  3."));
    }

    #[test]
    fn empty_feed_shows_empty_message() {
        let renderer = ConsoleRenderer::new(FeedKind::Likes);
        let state = state(Phase::Exhausted, &[]);
        let view = FeedViewModel::project(&state);

        let (lines, _) = renderer.lines_for(&view, 0);

        assert_eq!(lines, vec!["좋아요 누른 글이 없습니다".to_string()]);
    }

    #[test]
    fn reset_reprints_header() {
        let renderer = ConsoleRenderer::new(FeedKind::Likes);
        let state = state(Phase::InitialLoading, &[]);
        let view = FeedViewModel::project(&state);

        let (lines, count) = renderer.lines_for(&view, 10);

        assert_eq!(count, 0);
        assert_eq!(lines, vec!["== 좋아요 누른 글 ==".to_string(), "...".to_string()]);
    }

    #[test]
    fn errored_keeps_items_and_prompts_retry() {
        let renderer = ConsoleRenderer::new(FeedKind::Likes);
        let state = state(Phase::Errored, &[1, 2]);
        let view = FeedViewModel::project(&state);

        let (lines, _) = renderer.lines_for(&view, 2);

        assert_eq!(lines, vec!["후기 목록을 불러올 수 없습니다 (retry)".to_string()]);
    }
}
