//! Turns click actions into App state changes.

use super::hit_area::ClickAction;
use crate::app::App;

/// Apply a click that landed on a registered hit area.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::SortBy(key) => {
            app.select_sort(key);
            tracing::debug!("Click: SortBy({})", key.label());
        }
        ClickAction::SelectRow(index) => {
            app.select_row(index);
            tracing::debug!("Click: SelectRow({})", index);
        }
        ClickAction::RemoveStory(story) => {
            tracing::debug!("Click: RemoveStory(title={:?})", story.title);
            app.remove_story(&story);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppMessage;
    use crate::config::AppConfig;
    use crate::models::Story;
    use crate::view_state::SortKey;

    fn app() -> App {
        let mut app = App::new(&AppConfig::default());
        app.handle_message(AppMessage::StoriesLoaded(vec![
            Story::new("Alpha", "x", 1),
            Story::new("Beta", "y", 2),
            Story::new("alpha", "z", 3),
        ]));
        app.needs_redraw = false;
        app
    }

    #[test]
    fn test_sort_by_click() {
        let mut app = app();
        handle_click_action(&mut app, ClickAction::SortBy(SortKey::Point));
        assert_eq!(app.table.sort(), SortKey::Point);
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_select_row_click() {
        let mut app = app();
        handle_click_action(&mut app, ClickAction::SelectRow(2));
        assert_eq!(app.table.selected(), 2);
        handle_click_action(&mut app, ClickAction::SelectRow(99));
        assert_eq!(app.table.selected(), 2);
    }

    #[test]
    fn test_remove_click_removes_all_same_titles() {
        let mut app = app();
        handle_click_action(
            &mut app,
            ClickAction::RemoveStory(Story::new("Alpha", "x", 1)),
        );
        assert_eq!(app.stories(), &[Story::new("Beta", "y", 2)]);
    }
}
