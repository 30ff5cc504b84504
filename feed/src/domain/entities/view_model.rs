//! Read-only projection of feed state for the rendering layer

use serde::Serialize;

use super::{FeedState, Phase};
use crate::error::FetchFailure;

/// What the rendering layer sees after every state change.
///
/// Borrowed from the controller's state, so items can only be read.
#[derive(Debug, Serialize)]
pub struct FeedViewModel<'a, T> {
    pub items: &'a [T],
    pub phase: Phase,
    pub is_initial_loading: bool,
    pub is_incremental_loading: bool,
    /// Loaded to completion (or to a full page) and nothing came back
    pub is_empty: bool,
    pub is_exhausted: bool,
    pub has_error: bool,
    pub failure: Option<&'a FetchFailure>,
    /// Index of the item the scroll sentinel is attached to, if more pages
    /// may follow
    pub sentinel_index: Option<usize>,
}

impl<'a, T> FeedViewModel<'a, T> {
    /// Project a view model from controller state
    pub fn project(state: &'a FeedState<T>) -> Self {
        let phase = state.phase;
        let sentinel_index = match phase {
            Phase::Ready => state.items.len().checked_sub(1),
            _ => None,
        };

        Self {
            items: &state.items,
            phase,
            is_initial_loading: phase == Phase::InitialLoading,
            is_incremental_loading: phase == Phase::IncrementalLoading,
            is_empty: matches!(phase, Phase::Ready | Phase::Exhausted) && state.items.is_empty(),
            is_exhausted: phase == Phase::Exhausted,
            has_error: phase == Phase::Errored,
            failure: state.last_failure.as_ref(),
            sentinel_index,
        }
    }

    /// Whether the given item carries the scroll sentinel
    pub fn is_sentinel(&self, index: usize) -> bool {
        self.sentinel_index == Some(index)
    }
}
