//! Screen state machines.
//!
//! Each screen owns one state value, replaced wholesale on every transition.
//! Transitions are pure functions; the [`crate::app`] layer is the only
//! writer.

mod detail;
mod posts;

pub use detail::{DetailPartial, DetailState, DetailViewModel};
pub use posts::{Partial, PostsState};

/// Report a broken internal invariant: a defect in calling code, not a
/// runtime condition.
///
/// Debug builds abort immediately so the defect is caught during
/// development. Release builds log and continue, leaving the state
/// unchanged rather than crashing the session.
pub(crate) fn invariant_violation(message: &str) {
    if cfg!(debug_assertions) {
        panic!("state invariant violation: {message}");
    }
    tracing::error!("state invariant violation: {message}");
}
