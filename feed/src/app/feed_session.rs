//! Feed session
//!
//! Runs one [`FeedController`] inside a tokio task. The task is the only
//! place the controller is touched: commands from the host (credential
//! changes, sentinel reports, retries) and fetch completions are handled one
//! at a time, so a phase check and its transition always happen in the same
//! step. Fetches run as their own tasks and report back through a channel.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::app::feed_controller::{FeedController, FetchRequest};
use crate::app::sentinel::SentinelTracker;
use crate::domain::entities::{Credential, FetchTicket};
use crate::domain::ports::{FeedRenderer, PagedFetchService};
use crate::error::{FetchError, FetchFailure, SessionError};

/// Commands a host can send to a running session
#[derive(Debug)]
enum FeedCommand {
    Initialize(Option<Credential>),
    SentinelVisibility(bool),
    Intersect,
    Retry,
    Dispose,
}

/// Outcome of a fetch task
struct Completion<T> {
    ticket: FetchTicket,
    result: Result<Vec<T>, FetchError>,
}

/// Handle to a running feed session.
///
/// Cheap to clone. The session ends on `dispose` or once every handle has
/// been dropped (the page unmounted).
#[derive(Debug, Clone)]
pub struct FeedHandle {
    commands: mpsc::UnboundedSender<FeedCommand>,
}

impl FeedHandle {
    /// Bind the feed to a credential, or to none
    pub fn initialize(&self, credential: Option<Credential>) -> Result<(), SessionError> {
        self.send(FeedCommand::Initialize(credential))
    }

    /// The credential provider reported a new value (login, logout, switch)
    pub fn set_credential(&self, credential: Option<Credential>) -> Result<(), SessionError> {
        self.initialize(credential)
    }

    /// Raw visibility report for the scroll sentinel
    pub fn sentinel_visibility(&self, visible: bool) -> Result<(), SessionError> {
        self.send(FeedCommand::SentinelVisibility(visible))
    }

    /// A boundary crossing that has already been edge-detected
    pub fn intersect(&self) -> Result<(), SessionError> {
        self.send(FeedCommand::Intersect)
    }

    pub fn retry(&self) -> Result<(), SessionError> {
        self.send(FeedCommand::Retry)
    }

    pub fn dispose(&self) -> Result<(), SessionError> {
        self.send(FeedCommand::Dispose)
    }

    /// Wait until the session task has stopped
    pub async fn closed(&self) {
        self.commands.closed().await
    }

    fn send(&self, command: FeedCommand) -> Result<(), SessionError> {
        self.commands.send(command).map_err(|_| SessionError::Closed)
    }
}

/// Task state for one feed
pub struct FeedSession<F, R>
where
    F: PagedFetchService,
{
    controller: FeedController<F::Item>,
    sentinel: SentinelTracker,
    fetcher: Arc<F>,
    renderer: Arc<R>,
    completions: mpsc::UnboundedSender<Completion<F::Item>>,
    in_flight: Option<JoinHandle<()>>,
}

impl<F, R> FeedSession<F, R>
where
    F: PagedFetchService + 'static,
    R: FeedRenderer<F::Item> + 'static,
{
    /// Start a session on the current tokio runtime
    pub fn spawn(
        controller: FeedController<F::Item>,
        fetcher: Arc<F>,
        renderer: Arc<R>,
    ) -> FeedHandle {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();

        let session = Self {
            controller,
            sentinel: SentinelTracker::new(),
            fetcher,
            renderer,
            completions: completion_tx,
            in_flight: None,
        };
        tokio::spawn(session.run(command_rx, completion_rx));

        FeedHandle {
            commands: command_tx,
        }
    }

    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<FeedCommand>,
        mut completions: mpsc::UnboundedReceiver<Completion<F::Item>>,
    ) {
        info!(page_size = self.controller.page_size(), "feed session started");
        self.render();

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(FeedCommand::Dispose) | None => break,
                    Some(command) => self.handle_command(command),
                },
                Some(completion) = completions.recv() => self.handle_completion(completion),
            }
        }

        self.shutdown();
    }

    fn handle_command(&mut self, command: FeedCommand) {
        debug!(?command, "feed command");
        match command {
            FeedCommand::Initialize(credential) => {
                let session = self.controller.state().session;
                let request = self.controller.initialize(credential);
                if self.controller.state().session == session {
                    return;
                }

                // The outstanding fetch belongs to the previous dataset,
                // including on logout where nothing new is issued.
                self.cancel_in_flight();
                self.sentinel = SentinelTracker::new();
                self.dispatch(request);
                self.render();
            }
            FeedCommand::SentinelVisibility(visible) => {
                let sentinel_index = self.controller.view().sentinel_index;
                if self.sentinel.observe(sentinel_index, visible) {
                    self.intersect();
                }
            }
            FeedCommand::Intersect => self.intersect(),
            FeedCommand::Retry => {
                if let Some(request) = self.controller.retry() {
                    self.dispatch(Some(request));
                    self.render();
                }
            }
            // Handled by the run loop
            FeedCommand::Dispose => {}
        }
    }

    fn intersect(&mut self) {
        if let Some(request) = self.controller.on_intersect() {
            self.dispatch(Some(request));
            self.render();
        }
    }

    fn handle_completion(&mut self, completion: Completion<F::Item>) {
        let Completion { ticket, result } = completion;
        let applied = match result {
            Ok(page) => self.controller.on_fetch_succeeded(&ticket, page),
            Err(e) => self.controller.on_fetch_failed(&ticket, FetchFailure::from(e)),
        };

        if applied {
            self.in_flight = None;
            self.render();
        }
    }

    fn dispatch(&mut self, request: Option<FetchRequest>) {
        let Some(request) = request else {
            return;
        };

        debug!(
            offset = request.offset,
            page_size = request.page_size,
            credential = %request.credential.fingerprint(),
            "issuing page fetch"
        );

        let fetcher = self.fetcher.clone();
        let completions = self.completions.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = fetcher
                .fetch_page(&request.credential, request.offset, request.page_size)
                .await;
            // The session may have ended; nobody is left to tell.
            let _ = completions.send(Completion {
                ticket: request.ticket,
                result,
            });
        }));
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abort();
        }
    }

    fn render(&self) {
        self.renderer.render(&self.controller.view());
    }

    fn shutdown(&mut self) {
        self.controller.dispose();
        self.cancel_in_flight();
        info!(
            items = self.controller.items().len(),
            phase = %self.controller.phase(),
            "feed session stopped"
        );
    }
}
