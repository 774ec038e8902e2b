//! Story list state and its transition function.
//!
//! `reduce` is the only way [`StoriesState`] changes. It is pure and total:
//! every [`Action`] maps the old state to a new one, and unrecognized
//! actions leave it untouched.

use serde::Deserialize;

use crate::models::Story;

/// Snapshot of the fetched list and the request lifecycle.
///
/// `is_loading` and `is_error` are never both true. The human-readable error
/// text is not part of this state; the controller keeps it next to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoriesState {
    /// Stories in fetch order, minus any removed ones
    pub items: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
}

/// A request to transition [`StoriesState`].
///
/// Decodes from `{"type": "<LABEL>", "payload": ...}`; an unrecognized
/// label decodes to [`Action::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    /// The request has been issued
    #[serde(rename = "LOAD-DATA")]
    LoadData,
    /// The request resolved with this list
    #[serde(rename = "FETCH_SUCCESS")]
    FetchSuccess(Vec<Story>),
    /// The request failed
    #[serde(rename = "FETCH_ERROR")]
    FetchError,
    /// Drop every story whose title matches this one
    #[serde(rename = "REMOVE-ITEM")]
    RemoveItem(Story),
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Wire label, used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Action::LoadData => "LOAD-DATA",
            Action::FetchSuccess(_) => "FETCH_SUCCESS",
            Action::FetchError => "FETCH_ERROR",
            Action::RemoveItem(_) => "REMOVE-ITEM",
            Action::Unknown => "UNKNOWN",
        }
    }
}

/// Apply `action` to `state`.
pub fn reduce(state: StoriesState, action: Action) -> StoriesState {
    match action {
        Action::LoadData => StoriesState {
            is_loading: true,
            is_error: false,
            ..state
        },
        Action::FetchSuccess(items) => StoriesState {
            items,
            is_loading: false,
            is_error: false,
        },
        Action::FetchError => StoriesState {
            is_loading: false,
            is_error: true,
            ..state
        },
        Action::RemoveItem(target) => {
            let items = state
                .items
                .into_iter()
                .filter(|story| !story.title_matches(&target))
                .collect();
            StoriesState {
                items,
                is_loading: false,
                ..state
            }
        }
        Action::Unknown => state,
    }
}
