//! UI rendering.
//!
//! One screen: a heading, then either the loading line, the error line or
//! the story table, then a line of key hints.

pub mod interaction;
pub mod table;
mod theme;

pub use interaction::handle_click_action;
pub use theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use table::render_table;

pub const HEADING: &str = "Sort List";
pub const LOADING_TEXT: &str = "Loading...";
pub const KEY_HINTS: &str = "t title  a author  p points  n unsorted  ↑↓ move  d remove  q quit";

/// Render the whole screen and rebuild the hit areas for it.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_registry.clear();

    let [heading, _, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Span::styled(
            HEADING,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        heading,
    );

    let state = app.controller.state();
    if state.is_loading {
        frame.render_widget(Paragraph::new(LOADING_TEXT), body);
    } else if state.is_error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                app.controller.error_message().to_string(),
                Style::default().fg(COLOR_ERROR),
            )),
            body,
        );
    } else {
        render_table(
            frame,
            body,
            &app.table,
            app.controller.stories(),
            &mut app.hit_registry,
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(KEY_HINTS, Style::default().fg(COLOR_DIM)))),
        footer,
    );
}
