//! Postboard - a terminal client for browsing posts from a
//! JSONPlaceholder-style REST API.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod models;
pub mod state;
pub mod store;
pub mod traits;
pub mod ui;
