//! Table presenter state and row formatting.

use crate::models::Story;

use super::sort::SortKey;

/// Title and author cells show at most this many characters.
pub const CELL_MAX_CHARS: usize = 10;

/// Keep the first `max_chars` characters, with no ellipsis.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// One formatted row. `story` is the full, untruncated item behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub title: String,
    pub author: String,
    pub points: String,
    pub story: Story,
}

impl TableRow {
    pub fn from_story(story: &Story) -> Self {
        Self {
            title: truncate_chars(story.title.as_deref().unwrap_or_default(), CELL_MAX_CHARS),
            author: truncate_chars(story.author.as_deref().unwrap_or_default(), CELL_MAX_CHARS),
            points: story.points.map(|p| p.to_string()).unwrap_or_default(),
            story: story.clone(),
        }
    }
}

/// Presenter-local state: the chosen sort and the row cursor.
///
/// The controller never sees either. The cursor indexes the sorted rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TablePresenter {
    sort: SortKey,
    selected: usize,
}

impl TablePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Switch the ordering. The cursor goes back to the first row.
    pub fn select_sort(&mut self, key: SortKey) {
        self.sort = key;
        self.selected = 0;
    }

    /// Rows in display order.
    pub fn rows(&self, stories: &[Story]) -> Vec<TableRow> {
        self.sort
            .apply(stories)
            .iter()
            .map(TableRow::from_story)
            .collect()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The full story under the cursor, if any.
    pub fn selected_story(&self, stories: &[Story]) -> Option<Story> {
        self.sort.apply(stories).into_iter().nth(self.selected)
    }

    pub fn select(&mut self, index: usize, len: usize) {
        self.selected = index.min(len.saturating_sub(1));
    }

    pub fn select_next(&mut self, len: usize) {
        self.select(self.selected + 1, len);
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.select(len.saturating_sub(1), len);
    }

    /// Pull the cursor back inside a list that shrank.
    pub fn clamp_selection(&mut self, len: usize) {
        self.select(self.selected, len);
    }

    /// First visible row so that the cursor stays within `visible_rows`.
    pub fn scroll_offset(&self, visible_rows: usize) -> usize {
        if visible_rows == 0 || self.selected < visible_rows {
            0
        } else {
            self.selected + 1 - visible_rows
        }
    }
}
