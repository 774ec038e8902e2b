mod story;

pub use story::{SearchResponse, Story};
