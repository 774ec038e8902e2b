//! Application state
//!
//! - [`StoriesState`]: fetched stories plus loading/error flags
//! - [`Action`] / [`reduce`]: the pure transition function over it

mod stories;

pub use stories::{reduce, Action, StoriesState};
