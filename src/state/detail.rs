//! Two-source state machine for the post detail screen.
//!
//! Joins /users and /comments down to the author of one externally supplied
//! post and the comments on it. A missing author is a failure in its own
//! right, not an empty result. No stale retention here; the screen is
//! short-lived.

use crate::api::FetchError;
use crate::models::{comments_on, Comment, Post, User};

/// In-progress join of the two detail sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailPartial {
    #[default]
    Neither,
    JustAuthor(User),
    JustComments(Vec<Comment>),
}

/// State of the detail screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    /// No fetch ever started.
    #[default]
    Empty,
    /// A fetch cycle is in flight.
    Loading { partial: DetailPartial },
    /// Both sources resolved and the author was found.
    Populated {
        author: User,
        filtered_comments: Vec<Comment>,
    },
    /// A constituent fetch failed, or the author lookup found no match.
    Failed,
}

/// What the detail pane renders once populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewModel {
    pub body: String,
    pub author_name: String,
    pub comment_count: usize,
}

impl DetailState {
    /// The state to enter when the detail fetch cycle begins.
    pub fn after_starting_fetch(&self) -> DetailState {
        DetailState::Loading {
            partial: DetailPartial::Neither,
        }
    }

    /// Whether a fetch cycle is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading { .. })
    }

    /// Fold in the result of the /users fetch.
    pub fn with_users(self, result: Result<Vec<User>, FetchError>, post: &Post) -> DetailState {
        match result {
            Err(_) => DetailState::Failed,
            Ok(users) => self.with_author_from(users, post),
        }
    }

    /// Fold in the result of the /comments fetch.
    pub fn with_comments(
        self,
        result: Result<Vec<Comment>, FetchError>,
        post: &Post,
    ) -> DetailState {
        match result {
            Err(_) => DetailState::Failed,
            Ok(comments) => self.with_filtered_comments(comments_on(&comments, post)),
        }
    }

    /// Resolve the author against the fetched user list. Absence of a match
    /// fails the whole join even though the fetch itself succeeded.
    fn with_author_from(self, users: Vec<User>, post: &Post) -> DetailState {
        let Some(author) = users.into_iter().find(|u| u.id == post.user_id) else {
            return DetailState::Failed;
        };

        match self {
            // The sibling fetch of this cycle already failed; absorb.
            DetailState::Failed => DetailState::Failed,

            DetailState::Empty => DetailState::Loading {
                partial: DetailPartial::JustAuthor(author),
            },

            DetailState::Loading { partial } => match partial {
                DetailPartial::Neither | DetailPartial::JustAuthor(_) => DetailState::Loading {
                    partial: DetailPartial::JustAuthor(author),
                },
                DetailPartial::JustComments(filtered_comments) => DetailState::Populated {
                    author,
                    filtered_comments,
                },
            },

            DetailState::Populated {
                filtered_comments, ..
            } => DetailState::Populated {
                author,
                filtered_comments,
            },
        }
    }

    fn with_filtered_comments(self, filtered_comments: Vec<Comment>) -> DetailState {
        match self {
            // The sibling fetch of this cycle already failed; absorb.
            DetailState::Failed => DetailState::Failed,

            DetailState::Empty => DetailState::Loading {
                partial: DetailPartial::JustComments(filtered_comments),
            },

            DetailState::Loading { partial } => match partial {
                DetailPartial::Neither | DetailPartial::JustComments(_) => DetailState::Loading {
                    partial: DetailPartial::JustComments(filtered_comments),
                },
                DetailPartial::JustAuthor(author) => DetailState::Populated {
                    author,
                    filtered_comments,
                },
            },

            DetailState::Populated { author, .. } => DetailState::Populated {
                author,
                filtered_comments,
            },
        }
    }

    pub fn loading_indicator_visible(&self) -> bool {
        matches!(self, DetailState::Loading { .. })
    }

    pub fn failure_indicator_visible(&self) -> bool {
        matches!(self, DetailState::Failed)
    }

    /// The view model for the detail pane, present only once populated.
    pub fn view_model(&self, post: &Post) -> Option<DetailViewModel> {
        match self {
            DetailState::Populated {
                author,
                filtered_comments,
            } => Some(DetailViewModel {
                body: post.body.clone(),
                author_name: author.name.clone(),
                comment_count: filtered_comments.len(),
            }),
            DetailState::Empty | DetailState::Loading { .. } | DetailState::Failed => None,
        }
    }
}
