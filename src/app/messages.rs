//! AppMessage enum for async communication within the application.

use crate::api::FetchError;
use crate::models::{Comment, Post, User};

/// Messages received from spawned fetch tasks.
///
/// Every message carries the generation of the fetch cycle that produced
/// it; results from a superseded cycle or a torn-down detail session are
/// dropped on arrival.
#[derive(Debug)]
pub enum AppMessage {
    /// /posts resolved for the list screen
    PostsFetched {
        generation: u64,
        result: Result<Vec<Post>, FetchError>,
    },
    /// /users resolved for the list screen
    UsersFetched {
        generation: u64,
        result: Result<Vec<User>, FetchError>,
    },
    /// /comments resolved for the list screen
    CommentsFetched {
        generation: u64,
        result: Result<Vec<Comment>, FetchError>,
    },
    /// /users resolved for a detail session
    DetailUsersFetched {
        generation: u64,
        result: Result<Vec<User>, FetchError>,
    },
    /// /comments resolved for a detail session
    DetailCommentsFetched {
        generation: u64,
        result: Result<Vec<Comment>, FetchError>,
    },
}
