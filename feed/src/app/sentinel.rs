//! Scroll sentinel tracking
//!
//! Viewport observers report visibility as a level ("is the sentinel in view
//! right now"). The feed needs edges: one event per crossing into view.

/// Converts sentinel visibility reports into boundary-crossing events
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SentinelTracker {
    /// Sentinel position at the last report, if one was attached
    attached: Option<usize>,
    visible: bool,
}

impl SentinelTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visibility report for the sentinel at `sentinel_index`.
    ///
    /// Returns `true` when the report is a crossing into view: the sentinel
    /// was hidden before, or it has moved to another item while in view.
    pub fn observe(&mut self, sentinel_index: Option<usize>, visible: bool) -> bool {
        let Some(index) = sentinel_index else {
            self.attached = None;
            self.visible = false;
            return false;
        };

        let moved = self.attached != Some(index);
        let crossed = visible && (!self.visible || moved);

        self.attached = Some(index);
        self.visible = visible;
        crossed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
