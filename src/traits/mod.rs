//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET used by the search client

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
