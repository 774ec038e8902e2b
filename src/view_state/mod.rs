//! View-only state for the story table.
//!
//! The controller owns the list; everything here is about how that list is
//! shown: which ordering is selected, where the row cursor sits, and how a
//! story is formatted into cells. UI code reads these without touching the
//! controller.

pub mod sort;
pub mod table;

pub use sort::{SortFn, SortKey};
pub use table::{truncate_chars, TablePresenter, TableRow, CELL_MAX_CHARS};
