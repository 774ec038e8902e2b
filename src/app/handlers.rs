//! Event and message handlers for the App.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, AppMessage};
use crate::ui::interaction::handle_click_action;
use crate::view_state::SortKey;

impl App {
    /// Handle a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        self.controller.handle_message(msg);
        let len = self.stories().len();
        self.table.clamp_selection(len);
    }

    /// Handle a key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('t') => self.select_sort(SortKey::Title),
            KeyCode::Char('a') => self.select_sort(SortKey::Author),
            KeyCode::Char('p') => self.select_sort(SortKey::Point),
            KeyCode::Char('n') => self.select_sort(SortKey::None),
            KeyCode::Up | KeyCode::Char('k') => {
                self.table.select_previous();
                self.mark_dirty();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.stories().len();
                self.table.select_next(len);
                self.mark_dirty();
            }
            KeyCode::Home => {
                self.table.select_first();
                self.mark_dirty();
            }
            KeyCode::End => {
                let len = self.stories().len();
                self.table.select_last(len);
                self.mark_dirty();
            }
            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => self.remove_selected(),
            _ => {}
        }
    }

    /// Handle a mouse event. Only left clicks on registered areas do anything.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                handle_click_action(self, action);
            }
        }
    }
}
