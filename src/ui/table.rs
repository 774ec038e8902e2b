//! Story table rendering.
//!
//! Column widths are computed once per frame, so hit areas line up exactly
//! with what is drawn. Layout from the top of the body area:
//!
//! ```text
//! Title       Author      Points    Action
//! ─────────────────────────────────────────
//! row 0 ...                         X
//! ```

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM, COLOR_ERROR};
use crate::models::Story;
use crate::view_state::{SortKey, TablePresenter, TableRow};

/// Narrowest each column gets, in cells: Title, Author, Points, Action.
pub const MIN_COLUMN_WIDTHS: [u16; 4] = [10, 10, 8, 6];

/// Blank cells between columns.
pub const COLUMN_SPACING: u16 = 2;

/// Header label and the sort it selects (Action selects none).
const HEADERS: [(&str, Option<SortKey>); 4] = [
    ("Title", Some(SortKey::Title)),
    ("Author", Some(SortKey::Author)),
    ("Points", Some(SortKey::Point)),
    ("Action", None),
];

/// Label of the remove control.
pub const REMOVE_LABEL: &str = "X";

/// Rows above the first story row: header and rule.
const HEADER_LINES: u16 = 2;

fn widest(rows: &[TableRow], cell: impl Fn(&TableRow) -> &str) -> usize {
    rows.iter().map(|row| cell(row).width()).max().unwrap_or(0)
}

fn fit(min: u16, width: usize) -> u16 {
    min.max(u16::try_from(width).unwrap_or(u16::MAX))
}

/// Column widths for `rows`: each text column grows to its widest cell.
///
/// Ten wide characters (CJK, emoji) take twenty cells.
pub fn column_widths(rows: &[TableRow]) -> [u16; 4] {
    [
        fit(MIN_COLUMN_WIDTHS[0], widest(rows, |row| row.title.as_str())),
        fit(MIN_COLUMN_WIDTHS[1], widest(rows, |row| row.author.as_str())),
        fit(MIN_COLUMN_WIDTHS[2], widest(rows, |row| row.points.as_str())),
        MIN_COLUMN_WIDTHS[3],
    ]
}

/// Cell rects for a one-line row at `y`, clipped to `area`.
pub fn column_rects(area: Rect, y: u16, widths: [u16; 4]) -> [Rect; 4] {
    let mut x = area.x;
    widths.map(|width| {
        let available = area.right().saturating_sub(x);
        let rect = Rect::new(x.min(area.right()), y, width.min(available), 1);
        x = x.saturating_add(width.saturating_add(COLUMN_SPACING));
        rect
    })
}

/// Number of story rows that fit in `area`.
pub fn visible_rows(area: Rect) -> usize {
    area.height.saturating_sub(HEADER_LINES) as usize
}

fn render_cell(frame: &mut Frame, rect: Rect, text: &str, style: Style) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    frame.render_widget(Paragraph::new(Span::styled(text.to_string(), style)), rect);
}

/// Draw the table and register its clickable cells.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    presenter: &TablePresenter,
    stories: &[Story],
    hit_registry: &mut HitAreaRegistry,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let rows = presenter.rows(stories);
    let widths = column_widths(&rows);

    // Header
    let header_rects = column_rects(area, area.y, widths);
    for ((label, key), rect) in HEADERS.iter().zip(header_rects) {
        let color = match key {
            Some(k) if *k == presenter.sort() => COLOR_ACTIVE,
            _ => COLOR_ACCENT,
        };
        let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if key.is_some_and(|k| k == presenter.sort()) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        render_cell(frame, rect, label, style);
        if let Some(key) = key {
            if rect.width > 0 {
                hit_registry.register(rect, ClickAction::SortBy(*key));
            }
        }
    }

    if area.height < HEADER_LINES {
        return;
    }

    // Rule under the header
    let rule_rect = Rect::new(area.x, area.y + 1, area.width, 1);
    render_cell(
        frame,
        rule_rect,
        &"─".repeat(area.width as usize),
        Style::default().fg(COLOR_DIM),
    );

    let capacity = visible_rows(area);

    if rows.is_empty() {
        if capacity > 0 {
            let rect = Rect::new(area.x, area.y + HEADER_LINES, area.width, 1);
            render_cell(frame, rect, "No stories", Style::default().fg(COLOR_DIM));
        }
        return;
    }

    let offset = presenter.scroll_offset(capacity);
    let visible = rows.iter().enumerate().skip(offset).take(capacity);
    for (line, (index, row)) in visible.enumerate() {
        let y = area.y + HEADER_LINES + line as u16;
        let rects = column_rects(area, y, widths);

        let text_style = if index == presenter.selected() {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        render_cell(frame, rects[0], &row.title, text_style);
        render_cell(frame, rects[1], &row.author, text_style);
        render_cell(frame, rects[2], &row.points, text_style);
        render_cell(
            frame,
            rects[3],
            REMOVE_LABEL,
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        );

        hit_registry.register(
            Rect::new(area.x, y, area.width, 1),
            ClickAction::SelectRow(index),
        );
        if rects[3].width > 0 {
            hit_registry.register(rects[3], ClickAction::RemoveStory(row.story.clone()));
        }
    }
}
