//! Adapter implementations of the collaborator traits.
//!
//! Production adapters wrap real libraries (reqwest); mock adapters provide
//! configurable fakes for tests and the `--offline` mode.

pub mod mock;
mod reqwest_http;

pub use reqwest_http::ReqwestHttpClient;
