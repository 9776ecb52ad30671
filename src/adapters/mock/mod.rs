//! Mock adapters for testing and offline operation.

mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
