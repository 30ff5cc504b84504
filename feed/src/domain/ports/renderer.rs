//! Rendering layer port trait

use crate::domain::entities::FeedViewModel;

/// Consumer of feed view models
pub trait FeedRenderer<T>: Send + Sync {
    /// Called after every state change
    fn render(&self, view: &FeedViewModel<'_, T>);
}
