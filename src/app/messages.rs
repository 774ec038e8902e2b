//! AppMessage enum for async communication within the application.

use crate::models::Story;

/// Messages delivered from background tasks to the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The startup fetch resolved with this list
    StoriesLoaded(Vec<Story>),
    /// The startup fetch failed; carries the display text of the failure
    StoriesFailed(String),
}
