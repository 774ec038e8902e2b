//! Shared fixtures for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::*;
//!
//! let (mut app, mock) = mock_app(MockResponse::Success(hits_response(&[story("A", "x", 1)])));
//! let text = render_to_lines(&mut app, 60, 12);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use ratatui::{backend::TestBackend, Terminal};
use storylist::app::{App, AppMessage};
use storylist::models::Story;
use storylist::search::{SearchClient, SEARCH_API_URL};
use storylist::ui::render;

pub fn story(title: &str, author: &str, points: i64) -> Story {
    Story::new(title, author, points)
}

/// App wired to `mock` at the default search URL.
pub fn app_with_client(mock: &MockHttpClient) -> App {
    let search = SearchClient::with_http_client(SEARCH_API_URL, Arc::new(mock.clone()));
    App::with_search_client(search)
}

/// App wired to a mock client that answers every request with `response`.
pub fn mock_app(response: MockResponse) -> (App, MockHttpClient) {
    let mock = MockHttpConfig::new().with_default(response).build();
    (app_with_client(&mock), mock)
}

/// Wait for the next fetch result, giving up after a second.
pub async fn next_message(app: &mut App) -> Option<AppMessage> {
    let rx = app.message_rx.as_mut()?;
    tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .ok()
        .flatten()
}

/// Render one frame and return the screen as one string per row.
pub fn render_to_lines(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            render(f, &mut *app);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}
