//! Clickable regions.
//!
//! Components register hit areas while rendering; the event loop hit-tests
//! mouse clicks against whatever the last frame registered.

use ratatui::layout::Rect;

use crate::models::Story;
use crate::view_state::SortKey;

/// What a click on a hit area does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Column header: order the table by this key
    SortBy(SortKey),
    /// Row cell: move the cursor to this display row
    SelectRow(usize),
    /// Action cell: remove this (full, untruncated) story
    RemoveStory(Story),
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Hit areas for the current frame.
///
/// Cleared at the start of every render. Later registrations win where
/// areas overlap.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea::new(rect, action));
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
