//! Application state and logic for the TUI.
//!
//! - [`App`] - ties the controller, the table presenter and the event loop together
//! - [`StoryController`] - owns the story list and the fetch lifecycle
//! - [`AppMessage`] - results delivered from the fetch task

mod controller;
mod handlers;
mod messages;

pub use controller::{ActiveGuard, StoryController};
pub use messages::AppMessage;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::models::Story;
use crate::search::SearchClient;
use crate::ui::interaction::HitAreaRegistry;
use crate::view_state::{SortKey, TablePresenter};

/// Top-level application state.
pub struct App {
    /// Story list and fetch lifecycle
    pub controller: StoryController,
    /// Sort selection and row cursor
    pub table: TablePresenter,
    /// Clickable regions registered by the last render
    pub hit_registry: HitAreaRegistry,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub should_quit: bool,
    /// Set whenever state changes; the event loop redraws and clears it
    pub needs_redraw: bool,
}

impl App {
    /// Create the app against the configured endpoint.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_search_client(SearchClient::with_url(config.api_url.clone()))
    }

    /// Create the app with an explicit search client.
    pub fn with_search_client(search: SearchClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            controller: StoryController::new(search),
            table: TablePresenter::new(),
            hit_registry: HitAreaRegistry::new(),
            message_tx,
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Start the app: issue the startup fetch (first call only).
    pub fn activate(&mut self) {
        if self.controller.start_fetch(self.message_tx.clone()) {
            self.mark_dirty();
        }
    }

    /// End of life: late fetch results are dropped from here on.
    pub fn teardown(&mut self) {
        self.controller.deactivate();
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn stories(&self) -> &[Story] {
        self.controller.stories()
    }

    /// Whether the table (rather than the loading or error line) is showing.
    pub fn table_visible(&self) -> bool {
        let state = self.controller.state();
        !state.is_loading && !state.is_error
    }

    pub fn select_sort(&mut self, key: SortKey) {
        tracing::debug!("Sort selected: {}", key.label());
        self.table.select_sort(key);
        self.mark_dirty();
    }

    /// Remove `story` (and any same-titled story) from the list.
    pub fn remove_story(&mut self, story: &Story) {
        self.controller.remove(story);
        let len = self.stories().len();
        self.table.clamp_selection(len);
        self.mark_dirty();
    }

    /// Remove the story under the row cursor.
    pub fn remove_selected(&mut self) {
        if !self.table_visible() {
            return;
        }
        if let Some(story) = self.table.selected_story(self.controller.stories()) {
            self.remove_story(&story);
        }
    }

    pub fn select_row(&mut self, index: usize) {
        let len = self.stories().len();
        self.table.select(index, len);
        self.mark_dirty();
    }
}
