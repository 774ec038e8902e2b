use serde::{Deserialize, Serialize};

/// One search hit.
///
/// Every field is optional: the search API omits or nulls them freely
/// (comments have no title, some hits have no points).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Story {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub points: Option<i64>,
}

impl Story {
    /// Build a story with all three fields present.
    pub fn new(title: impl Into<String>, author: impl Into<String>, points: i64) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
            points: Some(points),
        }
    }

    /// Whether `other` names the same story for removal purposes.
    ///
    /// Titles compare case-insensitively. A missing title never matches,
    /// not even another missing title.
    pub fn title_matches(&self, other: &Story) -> bool {
        match (&self.title, &other.title) {
            (Some(a), Some(b)) => a.to_lowercase() == b.to_lowercase(),
            _ => false,
        }
    }
}

/// Body of `GET /api/v1/search`.
///
/// Only `hits` is read; a body without it fails to decode.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Story>,
}
