//! storylist - a terminal UI for Hacker News search results
//!
//! This library exposes modules for use in integration tests and benchmarks.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod search;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
