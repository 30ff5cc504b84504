//! Feed controller
//!
//! Pagination state machine behind an infinite-scroll list. It owns the
//! offset, the accumulated items and the loading phase, and decides when a
//! page may be fetched. It performs no I/O: every trigger that wants a fetch
//! returns a [`FetchRequest`] for the caller to execute, and the outcome is
//! reported back through [`FeedController::on_fetch_succeeded`] or
//! [`FeedController::on_fetch_failed`].
//!
//! ```text
//! Idle --initialize(cred)--> InitialLoading --full page--> Ready
//!                                           --short page--> Exhausted
//!                                           --failure----> Errored
//! Ready --intersect--> IncrementalLoading --full page--> Ready
//!                                         --short page--> Exhausted
//!                                         --failure----> Errored
//! Errored --retry--> InitialLoading | IncrementalLoading (same offset)
//! ```

use std::num::NonZeroUsize;

use tracing::{debug, warn};

use crate::domain::entities::{Credential, FeedState, FeedViewModel, FetchTicket, Phase};
use crate::error::FetchFailure;

/// A fetch the controller wants issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Must be handed back with the outcome
    pub ticket: FetchTicket,
    pub credential: Credential,
    pub offset: usize,
    pub page_size: usize,
}

/// Pagination controller for one feed instance
#[derive(Debug)]
pub struct FeedController<T> {
    state: FeedState<T>,
    page_size: NonZeroUsize,
}

impl<T> FeedController<T> {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            state: FeedState::new(),
            page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn state(&self) -> &FeedState<T> {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn offset(&self) -> usize {
        self.state.offset
    }

    pub fn items(&self) -> &[T] {
        &self.state.items
    }

    pub fn is_disposed(&self) -> bool {
        self.state.disposed
    }

    /// Project the current view model
    pub fn view(&self) -> FeedViewModel<'_, T> {
        FeedViewModel::project(&self.state)
    }

    /// Bind the controller to a credential.
    ///
    /// A credential different from the current one resets the feed, since
    /// the dataset is user-scoped. Without a credential the controller stays
    /// `Idle` and never fetches.
    pub fn initialize(&mut self, credential: Option<Credential>) -> Option<FetchRequest> {
        if self.state.disposed {
            debug!("initialize ignored: controller disposed");
            return None;
        }

        if self.state.initialized && self.state.credential == credential {
            debug!(phase = %self.state.phase, "initialize ignored: same credential");
            return None;
        }

        if self.state.initialized {
            debug!(
                previous_session = %self.state.session,
                "credential changed, resetting feed"
            );
        }
        self.reset(credential);

        if self.state.credential.is_none() {
            debug!(session = %self.state.session, "no credential, staying idle");
            return None;
        }

        self.transition(Phase::InitialLoading);
        self.request()
    }

    /// The scroll sentinel came into view
    pub fn on_intersect(&mut self) -> Option<FetchRequest> {
        if self.state.disposed || self.state.phase != Phase::Ready {
            debug!(phase = %self.state.phase, "intersection ignored");
            return None;
        }

        self.state.offset += self.page_size.get();
        self.transition(Phase::IncrementalLoading);
        self.request()
    }

    /// A fetch resolved with a page of items.
    ///
    /// Items beyond `page_size` belong to the next page and are dropped, so
    /// the next offset never fetches them twice. Returns `false` when the
    /// outcome was stale and ignored.
    pub fn on_fetch_succeeded(&mut self, ticket: &FetchTicket, mut page: Vec<T>) -> bool {
        if !self.accepts(ticket) {
            return false;
        }

        if page.len() > self.page_size.get() {
            warn!(
                offset = ticket.offset,
                received = page.len(),
                page_size = self.page_size.get(),
                "oversized page truncated"
            );
            page.truncate(self.page_size.get());
        }

        let received = page.len();
        self.state.items.extend(page);

        if received < self.page_size.get() {
            self.transition(Phase::Exhausted);
        } else {
            self.transition(Phase::Ready);
        }
        debug!(
            offset = ticket.offset,
            received,
            total = self.state.items.len(),
            "page appended"
        );
        true
    }

    /// A fetch failed.
    ///
    /// The offset is kept so that `retry` asks for the same page again.
    /// Previously loaded items stay. Returns `false` when stale.
    pub fn on_fetch_failed(&mut self, ticket: &FetchTicket, failure: FetchFailure) -> bool {
        if !self.accepts(ticket) {
            return false;
        }

        warn!(offset = ticket.offset, reason = %failure.reason, "page fetch failed");
        self.state.last_failure = Some(failure);
        self.transition(Phase::Errored);
        true
    }

    /// Re-issue the failed fetch at the current offset
    pub fn retry(&mut self) -> Option<FetchRequest> {
        if self.state.disposed || self.state.phase != Phase::Errored {
            debug!(phase = %self.state.phase, "retry ignored");
            return None;
        }

        self.state.last_failure = None;
        if self.state.offset == 0 {
            self.transition(Phase::InitialLoading);
        } else {
            self.transition(Phase::IncrementalLoading);
        }
        self.request()
    }

    /// Tear the controller down. Every later call is a no-op.
    pub fn dispose(&mut self) {
        if !self.state.disposed {
            debug!(session = %self.state.session, phase = %self.state.phase, "controller disposed");
            self.state.disposed = true;
        }
    }

    fn reset(&mut self, credential: Option<Credential>) {
        self.state = FeedState::new();
        self.state.credential = credential;
        self.state.initialized = true;
    }

    fn accepts(&self, ticket: &FetchTicket) -> bool {
        if self.state.disposed {
            debug!(offset = ticket.offset, "completion dropped: controller disposed");
            return false;
        }
        if ticket.session != self.state.session {
            warn!(
                ticket_session = %ticket.session,
                session = %self.state.session,
                "completion dropped: stale session"
            );
            return false;
        }
        if !self.state.phase.is_loading() || ticket.offset != self.state.offset {
            warn!(
                offset = ticket.offset,
                current_offset = self.state.offset,
                phase = %self.state.phase,
                "completion dropped: no matching fetch outstanding"
            );
            return false;
        }
        true
    }

    fn request(&self) -> Option<FetchRequest> {
        let credential = self.state.credential.clone()?;
        Some(FetchRequest {
            ticket: self.state.ticket(),
            credential,
            offset: self.state.offset,
            page_size: self.page_size.get(),
        })
    }

    fn transition(&mut self, to: Phase) {
        debug!(from = %self.state.phase, to = %to, offset = self.state.offset, "phase transition");
        self.state.phase = to;
    }
}
