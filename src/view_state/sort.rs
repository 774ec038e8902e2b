//! Render-time orderings of the story list.

use crate::models::Story;

/// A transform from the controller's list to the order shown on screen.
pub type SortFn = fn(&[Story]) -> Vec<Story>;

/// Which column the table is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Fetch order
    #[default]
    None,
    Title,
    Author,
    Point,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::None, SortKey::Title, SortKey::Author, SortKey::Point];

    /// The transform for this key.
    pub fn transform(self) -> SortFn {
        match self {
            SortKey::None => unsorted,
            SortKey::Title => by_title,
            SortKey::Author => by_author,
            SortKey::Point => by_points_reversed,
        }
    }

    /// Apply this key's transform.
    pub fn apply(self, stories: &[Story]) -> Vec<Story> {
        (self.transform())(stories)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "NONE",
            SortKey::Title => "TITLE",
            SortKey::Author => "AUTHOR",
            SortKey::Point => "POINT",
        }
    }
}

fn unsorted(stories: &[Story]) -> Vec<Story> {
    stories.to_vec()
}

// `Option` orders `None` first, so stories missing the field sort lowest.
// `sort_by` is stable.
// Strings compare by Unicode code point, not UTF-16 code unit.

fn by_title(stories: &[Story]) -> Vec<Story> {
    let mut sorted = stories.to_vec();
    sorted.sort_by(|a, b| a.title.cmp(&b.title));
    sorted
}

fn by_author(stories: &[Story]) -> Vec<Story> {
    let mut sorted = stories.to_vec();
    sorted.sort_by(|a, b| a.author.cmp(&b.author));
    sorted
}

/// Stable ascending by points, then the whole list reversed.
///
/// Equal-points stories therefore come out in reverse fetch order, which is
/// not what a stable descending sort would give.
fn by_points_reversed(stories: &[Story]) -> Vec<Story> {
    let mut sorted = stories.to_vec();
    sorted.sort_by_key(|story| story.points);
    sorted.reverse();
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(stories: &[Story]) -> Vec<Option<&str>> {
        stories.iter().map(|s| s.title.as_deref()).collect()
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(SortKey::default(), SortKey::None);
    }

    #[test]
    fn test_none_is_identity() {
        let stories = vec![Story::new("b", "x", 2), Story::new("a", "y", 1)];
        assert_eq!(SortKey::None.apply(&stories), stories);
    }

    #[test]
    fn test_title_sort_puts_missing_first() {
        let stories = vec![
            Story::new("b", "x", 1),
            Story {
                title: None,
                ..Story::new("", "y", 2)
            },
            Story::new("a", "z", 3),
        ];
        let sorted = SortKey::Title.apply(&stories);
        assert_eq!(titles(&sorted), vec![None, Some("a"), Some("b")]);
    }

    #[test]
    fn test_title_sort_is_case_sensitive_lexicographic() {
        let stories = vec![
            Story::new("b", "x", 1),
            Story::new("B", "x", 1),
            Story::new("a", "x", 1),
        ];
        let sorted = SortKey::Title.apply(&stories);
        assert_eq!(titles(&sorted), vec![Some("B"), Some("a"), Some("b")]);
    }

    #[test]
    fn test_author_sort_is_stable() {
        let stories = vec![
            Story::new("t1", "bob", 1),
            Story::new("t2", "alice", 1),
            Story::new("t3", "bob", 1),
        ];
        let sorted = SortKey::Author.apply(&stories);
        assert_eq!(titles(&sorted), vec![Some("t2"), Some("t1"), Some("t3")]);
    }

    #[test]
    fn test_point_sort_reverses_ties() {
        let stories = vec![
            Story::new("t1", "a", 1),
            Story::new("t2", "b", 5),
            Story::new("t3", "c", 5),
        ];
        let sorted = SortKey::Point.apply(&stories);
        assert_eq!(titles(&sorted), vec![Some("t3"), Some("t2"), Some("t1")]);
    }

    #[test]
    fn test_point_sort_puts_missing_points_last() {
        let stories = vec![
            Story {
                points: None,
                ..Story::new("none", "a", 0)
            },
            Story::new("ten", "b", 10),
        ];
        let sorted = SortKey::Point.apply(&stories);
        assert_eq!(titles(&sorted), vec![Some("ten"), Some("none")]);
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let stories = vec![Story::new("b", "x", 1), Story::new("a", "y", 2)];
        let _ = SortKey::Title.apply(&stories);
        assert_eq!(titles(&stories), vec![Some("b"), Some("a")]);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = SortKey::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels, vec!["NONE", "TITLE", "AUTHOR", "POINT"]);
    }
}
