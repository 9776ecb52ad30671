//! Trait abstractions for external collaborators.
//!
//! These traits enable dependency injection and mocking in tests.

mod http;

pub use http::{HttpClient, HttpError, Response};
