//! Error types.
//!
//! There is one user-facing failure, [`FetchError`], raised at the fetch
//! boundary and turned into an error line on screen. Everything else in the
//! binary is plumbing and uses `color_eyre::Result`.

mod fetch;

pub use fetch::{FetchError, FetchResult};
