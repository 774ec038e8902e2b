//! View-state controller: owns the story list and the fetch lifecycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;

use super::AppMessage;
use crate::models::Story;
use crate::search::SearchClient;
use crate::state::{reduce, Action, StoriesState};

/// Shared "still alive" flag between the controller and its fetch task.
///
/// Once deactivated, a late fetch result is dropped instead of applied.
#[derive(Debug, Clone)]
pub struct ActiveGuard(Arc<AtomicBool>);

impl ActiveGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn deactivate(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for ActiveGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of [`StoriesState`].
///
/// All changes go through [`StoryController::dispatch`]. The error text is
/// kept beside the state, not inside it.
#[derive(Debug)]
pub struct StoryController {
    state: StoriesState,
    error_message: String,
    search: SearchClient,
    fetch_started: bool,
    guard: ActiveGuard,
}

impl StoryController {
    pub fn new(search: SearchClient) -> Self {
        Self {
            state: StoriesState::default(),
            error_message: String::new(),
            search,
            fetch_started: false,
            guard: ActiveGuard::new(),
        }
    }

    pub fn state(&self) -> &StoriesState {
        &self.state
    }

    pub fn stories(&self) -> &[Story] {
        &self.state.items
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn is_active(&self) -> bool {
        self.guard.is_active()
    }

    /// Run one action through the reducer.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!("dispatch {}", action.label());
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// Issue the startup fetch.
    ///
    /// Only the first call does anything; it returns `true`. The result
    /// arrives on `message_tx` as an [`AppMessage`] and must be fed back
    /// through [`StoryController::handle_message`]. Must be called inside a
    /// tokio runtime.
    pub fn start_fetch(&mut self, message_tx: mpsc::UnboundedSender<AppMessage>) -> bool {
        if self.fetch_started {
            return false;
        }
        self.fetch_started = true;

        self.dispatch(Action::LoadData);

        let search = self.search.clone();
        let guard = self.guard.clone();
        tracing::info!("Fetching stories from {}", search.url);

        tokio::spawn(async move {
            let message = match search.fetch_stories().await {
                Ok(stories) => {
                    tracing::info!("Fetched {} stories", stories.len());
                    AppMessage::StoriesLoaded(stories)
                }
                Err(e) => {
                    tracing::warn!("Story fetch failed [{}]: {}", e.error_code(), e);
                    AppMessage::StoriesFailed(e.to_string())
                }
            };

            if guard.is_active() {
                let _ = message_tx.send(message);
            } else {
                tracing::debug!("Controller gone, dropping fetch result");
            }
        });

        true
    }

    /// Apply a fetch result. Ignored once the controller is deactivated.
    pub fn handle_message(&mut self, msg: AppMessage) {
        if !self.guard.is_active() {
            tracing::debug!("Ignoring {:?} after deactivation", msg);
            return;
        }

        match msg {
            AppMessage::StoriesLoaded(stories) => self.dispatch(Action::FetchSuccess(stories)),
            AppMessage::StoriesFailed(error) => {
                self.error_message = error;
                self.dispatch(Action::FetchError);
            }
        }
    }

    /// Remove every story whose title matches `story`'s.
    pub fn remove(&mut self, story: &Story) {
        tracing::debug!("Removing story titled {:?}", story.title);
        self.dispatch(Action::RemoveItem(story.clone()));
    }

    /// Stop accepting fetch results.
    pub fn deactivate(&mut self) {
        self.guard.deactivate();
    }
}

impl Drop for StoryController {
    fn drop(&mut self) {
        self.guard.deactivate();
    }
}
