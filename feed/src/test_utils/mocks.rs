//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record every call and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{Notify, Semaphore};

use crate::domain::entities::{Credential, FeedViewModel, Phase, ReviewSummary};
use crate::domain::ports::{FeedRenderer, PagedFetchService};
use crate::error::FetchError;

const WAIT_TIMEOUT: Duration = Duration::from_secs(2);

// ============================================================================
// Scripted Fetch Service
// ============================================================================

/// A recorded `fetch_page` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub credential: Credential,
    pub offset: usize,
    pub page_size: usize,
}

/// Answers fetches from a queue of scripted results.
///
/// An exhausted script answers with an empty page. When gated, every fetch
/// waits for a permit on the gate before answering.
#[derive(Default)]
pub struct ScriptedFetchService {
    responses: Mutex<VecDeque<Result<Vec<ReviewSummary>, FetchError>>>,
    calls: Mutex<Vec<FetchCall>>,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedFetchService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful page
    pub fn with_page(self, page: Vec<ReviewSummary>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(page));
        self
    }

    /// Queue a failure
    pub fn with_failure(self, error: FetchError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Hold every answer until a permit is added to the gate
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    pub fn gate(&self) -> Arc<Semaphore> {
        self.gate.clone().expect("service is not gated")
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn offsets(&self) -> Vec<usize> {
        self.calls().iter().map(|c| c.offset).collect()
    }

    /// Wait until at least `n` fetches have started
    pub async fn wait_for_calls(&self, n: usize) {
        tokio::time::timeout(WAIT_TIMEOUT, async {
            while self.call_count() < n {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("timed out waiting for fetch calls");
    }
}

#[async_trait]
impl PagedFetchService for ScriptedFetchService {
    type Item = ReviewSummary;

    async fn fetch_page(
        &self,
        credential: &Credential,
        offset: usize,
        page_size: usize,
    ) -> Result<Vec<ReviewSummary>, FetchError> {
        self.calls.lock().unwrap().push(FetchCall {
            credential: credential.clone(),
            offset,
            page_size,
        });

        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

// ============================================================================
// Recording Renderer
// ============================================================================

/// Owned copy of a rendered view model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub phase: Phase,
    pub ids: Vec<i64>,
    pub is_initial_loading: bool,
    pub is_incremental_loading: bool,
    pub is_empty: bool,
    pub has_error: bool,
    pub failure: Option<String>,
    pub sentinel_index: Option<usize>,
}

#[derive(Default)]
pub struct RecordingRenderer {
    views: Mutex<Vec<RenderedView>>,
    rendered: Notify,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> Vec<RenderedView> {
        self.views.lock().unwrap().clone()
    }

    /// Wait until the most recent render matches `predicate`
    pub async fn wait_for(&self, predicate: impl Fn(&RenderedView) -> bool) -> RenderedView {
        tokio::time::timeout(WAIT_TIMEOUT, async {
            loop {
                let rendered = self.rendered.notified();
                if let Some(view) = self.views.lock().unwrap().last() {
                    if predicate(view) {
                        return view.clone();
                    }
                }
                rendered.await;
            }
        })
        .await
        .expect("timed out waiting for render")
    }
}

impl FeedRenderer<ReviewSummary> for RecordingRenderer {
    fn render(&self, view: &FeedViewModel<'_, ReviewSummary>) {
        self.views.lock().unwrap().push(RenderedView {
            phase: view.phase,
            ids: view.items.iter().map(|r| r.id.0).collect(),
            is_initial_loading: view.is_initial_loading,
            is_incremental_loading: view.is_incremental_loading,
            is_empty: view.is_empty,
            has_error: view.has_error,
            failure: view.failure.map(|f| f.reason.clone()),
            sentinel_index: view.sentinel_index,
        });
        self.rendered.notify_waiters();
    }
}
