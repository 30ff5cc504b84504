//! Feed state entity
//!
//! The state a feed controller owns for the lifetime of one page mount.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Credential;
use crate::error::FetchFailure;

/// Identity of one credential-scoped dataset inside a controller.
///
/// Regenerated on every reset so completions for an earlier dataset can be
/// told apart from current ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of an issued fetch: which dataset and which page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub session: SessionId,
    pub offset: usize,
}

/// Where the controller is in its fetch lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No credential; nothing is fetched
    Idle,
    /// First page in flight
    InitialLoading,
    /// A later page in flight
    IncrementalLoading,
    /// Waiting for the sentinel to come into view
    Ready,
    /// The last page was short; no further fetches this session
    Exhausted,
    /// The last fetch failed; waiting for an explicit retry
    Errored,
}

impl Phase {
    /// Whether a fetch is outstanding in this phase
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::InitialLoading | Phase::IncrementalLoading)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::InitialLoading => write!(f, "initial_loading"),
            Phase::IncrementalLoading => write!(f, "incremental_loading"),
            Phase::Ready => write!(f, "ready"),
            Phase::Exhausted => write!(f, "exhausted"),
            Phase::Errored => write!(f, "errored"),
        }
    }
}

/// State owned by a feed controller
#[derive(Debug, Clone)]
pub struct FeedState<T> {
    /// Accumulated items in arrival order; append-only within a session
    pub items: Vec<T>,
    /// Offset of the most recently requested page
    pub offset: usize,
    pub phase: Phase,
    pub credential: Option<Credential>,
    pub session: SessionId,
    /// Reason of the most recent failure, cleared on retry
    pub last_failure: Option<FetchFailure>,
    /// Set once `initialize` has been called
    pub initialized: bool,
    /// Set on teardown; the state is no longer mutated afterwards
    pub disposed: bool,
}

impl<T> FeedState<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            offset: 0,
            phase: Phase::Idle,
            credential: None,
            session: SessionId::new(),
            last_failure: None,
            initialized: false,
            disposed: false,
        }
    }

    /// Ticket for a fetch of the current page
    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            session: self.session,
            offset: self.offset,
        }
    }
}

impl<T> Default for FeedState<T> {
    fn default() -> Self {
        Self::new()
    }
}
