//! Aggregation state machine for the posts list screen.
//!
//! Three independent fetches (/posts, /users, /comments) are launched
//! concurrently and complete in arbitrary order. This machine folds their
//! results into a single coherent state, retaining the last fully-joined
//! data set as stale content while a refresh is in flight or after a
//! refresh fails.
//!
//! Transitions:
//!
//! - `Empty -> Loading` on fetch start
//! - `Loading -> Loading` while the join is incomplete
//! - `Loading -> Populated` on the update that completes the join
//! - any failure -> `Failed`, no partial-success display
//! - `Populated -> Loading` / `Failed -> Loading` only via a new fetch start
//!
//! Stale data is carried forward unmodified; it is never merged with
//! partial results of the next cycle.

use crate::api::FetchError;
use crate::models::{Comment, CompleteData, Post, User};

use super::invariant_violation;

/// In-progress join: each field absent until its fetch resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partial {
    pub posts: Option<Vec<Post>>,
    pub users: Option<Vec<User>>,
    pub comments: Option<Vec<Comment>>,
}

impl Partial {
    /// The empty partial, no fetch resolved yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The completed join, defined exactly when all three fields are present.
    pub fn completed(&self) -> Option<CompleteData> {
        match (&self.posts, &self.users, &self.comments) {
            (Some(posts), Some(users), Some(comments)) => Some(CompleteData {
                posts: posts.clone(),
                users: users.clone(),
                comments: comments.clone(),
            }),
            _ => None,
        }
    }
}

/// One resolved constituent of the join.
#[derive(Debug, Clone)]
enum ApiData {
    Posts(Vec<Post>),
    Users(Vec<User>),
    Comments(Vec<Comment>),
}

/// State of the posts list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PostsState {
    /// No fetch ever started.
    #[default]
    Empty,
    /// A fetch cycle is in flight.
    Loading {
        partial: Partial,
        stale: Option<CompleteData>,
    },
    /// The last fetch cycle fully succeeded.
    Populated { data: CompleteData },
    /// At least one constituent fetch failed.
    Failed { stale: Option<CompleteData> },
}

impl PostsState {
    /// The state to enter when a new fetch cycle begins, carrying the
    /// current data forward as stale.
    ///
    /// Returns `None` when a cycle is already in flight: overlapping
    /// fetches are rejected here rather than relying on a caller-side
    /// guard.
    pub fn after_starting_fetch(&self) -> Option<PostsState> {
        if matches!(self, PostsState::Loading { .. }) {
            return None;
        }
        Some(PostsState::Loading {
            partial: Partial::empty(),
            stale: self.current_or_stale().cloned(),
        })
    }

    /// The currently displayable data: populated data, or stale data
    /// carried through `Loading`/`Failed`.
    pub fn current_or_stale(&self) -> Option<&CompleteData> {
        match self {
            PostsState::Empty => None,
            PostsState::Loading { stale, .. } => stale.as_ref(),
            PostsState::Populated { data } => Some(data),
            PostsState::Failed { stale } => stale.as_ref(),
        }
    }

    /// Whether a fetch cycle is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, PostsState::Loading { .. })
    }

    /// Fold in the result of the /posts fetch.
    pub fn with_posts(self, result: Result<Vec<Post>, FetchError>) -> PostsState {
        match result {
            Ok(posts) => self.with_data(ApiData::Posts(posts)),
            Err(_) => self.after_failure(),
        }
    }

    /// Fold in the result of the /users fetch.
    pub fn with_users(self, result: Result<Vec<User>, FetchError>) -> PostsState {
        match result {
            Ok(users) => self.with_data(ApiData::Users(users)),
            Err(_) => self.after_failure(),
        }
    }

    /// Fold in the result of the /comments fetch.
    pub fn with_comments(self, result: Result<Vec<Comment>, FetchError>) -> PostsState {
        match result {
            Ok(comments) => self.with_data(ApiData::Comments(comments)),
            Err(_) => self.after_failure(),
        }
    }

    /// A single failed source fails the whole join, regardless of how many
    /// of the other fetches are pending or already succeeded.
    fn after_failure(self) -> PostsState {
        PostsState::Failed {
            stale: self.current_or_stale().cloned(),
        }
    }

    fn with_data(self, data: ApiData) -> PostsState {
        match self {
            PostsState::Loading { mut partial, stale } => {
                match data {
                    ApiData::Posts(posts) => partial.posts = Some(posts),
                    ApiData::Users(users) => partial.users = Some(users),
                    ApiData::Comments(comments) => partial.comments = Some(comments),
                }
                match partial.completed() {
                    Some(data) => PostsState::Populated { data },
                    None => PostsState::Loading { partial, stale },
                }
            }
            PostsState::Empty | PostsState::Populated { .. } | PostsState::Failed { .. } => {
                // A success result is only valid while a cycle is in
                // flight; the caller drops late results.
                invariant_violation(&format!(
                    "fetch success applied outside Loading, state: {}",
                    self.name()
                ));
                self
            }
        }
    }

    /// Show the full-screen spinner only when there is no stale content to
    /// keep on screen.
    pub fn loading_indicator_visible(&self) -> bool {
        self.current_or_stale().is_none() && matches!(self, PostsState::Loading { .. })
    }

    /// Show the full-screen failure view only when there is no stale
    /// content to keep on screen.
    pub fn failure_indicator_visible(&self) -> bool {
        self.current_or_stale().is_none() && matches!(self, PostsState::Failed { .. })
    }

    /// Show the "Stale?" badge when a refresh failed but old content is
    /// still displayed.
    pub fn stale_badge_visible(&self) -> bool {
        matches!(self, PostsState::Failed { stale: Some(_) })
    }

    /// The posts to render, empty when nothing is displayable.
    pub fn posts(&self) -> &[Post] {
        self.current_or_stale()
            .map(|data| data.posts.as_slice())
            .unwrap_or(&[])
    }

    fn name(&self) -> &'static str {
        match self {
            PostsState::Empty => "Empty",
            PostsState::Loading { .. } => "Loading",
            PostsState::Populated { .. } => "Populated",
            PostsState::Failed { .. } => "Failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;

    fn complete() -> CompleteData {
        CompleteData {
            posts: vec![Post {
                id: 1,
                user_id: 2,
                title: "title".to_string(),
                body: "body".to_string(),
            }],
            users: vec![User {
                id: 2,
                name: "Leanne".to_string(),
            }],
            comments: vec![Comment { id: 1, post_id: 1 }],
        }
    }

    fn fetch_err() -> FetchError {
        FetchError::BadStatus(500)
    }

    #[test]
    fn test_initial_state_is_empty() {
        assert_eq!(PostsState::default(), PostsState::Empty);
    }

    #[test]
    fn test_start_fetch_from_empty_has_no_stale() {
        let state = PostsState::Empty.after_starting_fetch().unwrap();
        assert_eq!(
            state,
            PostsState::Loading {
                partial: Partial::empty(),
                stale: None
            }
        );
    }

    #[test]
    fn test_start_fetch_rejected_while_loading() {
        let state = PostsState::Empty.after_starting_fetch().unwrap();
        assert!(state.after_starting_fetch().is_none());
    }

    #[test]
    fn test_start_fetch_from_populated_carries_stale() {
        let data = complete();
        let state = PostsState::Populated { data: data.clone() }
            .after_starting_fetch()
            .unwrap();
        assert_eq!(
            state,
            PostsState::Loading {
                partial: Partial::empty(),
                stale: Some(data)
            }
        );
    }

    #[test]
    fn test_two_of_three_stays_loading() {
        let data = complete();
        let state = PostsState::Empty
            .after_starting_fetch()
            .unwrap()
            .with_posts(Ok(data.posts.clone()))
            .with_users(Ok(data.users.clone()));
        assert!(state.is_loading());
        assert!(state.loading_indicator_visible());
    }

    #[test]
    fn test_third_result_completes_the_join() {
        let data = complete();
        let state = PostsState::Empty
            .after_starting_fetch()
            .unwrap()
            .with_posts(Ok(data.posts.clone()))
            .with_users(Ok(data.users.clone()))
            .with_comments(Ok(data.comments.clone()));
        assert_eq!(state, PostsState::Populated { data });
    }

    #[test]
    fn test_failure_while_loading_discards_partial() {
        let data = complete();
        let state = PostsState::Empty
            .after_starting_fetch()
            .unwrap()
            .with_posts(Ok(data.posts))
            .with_users(Err(fetch_err()));
        assert_eq!(state, PostsState::Failed { stale: None });
        assert!(state.failure_indicator_visible());
        assert!(!state.stale_badge_visible());
    }

    #[test]
    fn test_stale_round_trip_through_failure() {
        let data = complete();
        let state = PostsState::Populated { data: data.clone() }
            .after_starting_fetch()
            .unwrap()
            .with_comments(Err(fetch_err()));
        assert_eq!(state, PostsState::Failed { stale: Some(data) });
    }

    #[test]
    fn test_failed_with_stale_keeps_content_visible() {
        let data = complete();
        let state = PostsState::Failed {
            stale: Some(data.clone()),
        };
        assert!(!state.loading_indicator_visible());
        assert!(!state.failure_indicator_visible());
        assert!(state.stale_badge_visible());
        assert_eq!(state.posts(), data.posts.as_slice());
    }

    #[test]
    fn test_new_data_supersedes_stale() {
        let old = complete();
        let mut new_data = complete();
        new_data.posts[0].title = "updated".to_string();

        let state = PostsState::Populated { data: old }
            .after_starting_fetch()
            .unwrap()
            .with_posts(Ok(new_data.posts.clone()))
            .with_users(Ok(new_data.users.clone()))
            .with_comments(Ok(new_data.comments.clone()));
        assert_eq!(state, PostsState::Populated { data: new_data });
    }

    #[test]
    fn test_replayed_result_overwrites_in_place() {
        let data = complete();
        let state = PostsState::Empty
            .after_starting_fetch()
            .unwrap()
            .with_posts(Ok(data.posts.clone()))
            .with_posts(Ok(data.posts.clone()));
        assert_eq!(
            state,
            PostsState::Loading {
                partial: Partial {
                    posts: Some(data.posts),
                    users: None,
                    comments: None
                },
                stale: None
            }
        );
    }

    #[test]
    fn test_failure_after_failure_keeps_stale() {
        let data = complete();
        let state = PostsState::Failed {
            stale: Some(data.clone()),
        }
        .with_users(Err(fetch_err()));
        assert_eq!(state, PostsState::Failed { stale: Some(data) });
    }

    #[test]
    #[should_panic(expected = "state invariant violation")]
    fn test_success_applied_to_empty_aborts() {
        let _ = PostsState::Empty.with_posts(Ok(vec![]));
    }

    #[test]
    #[should_panic(expected = "state invariant violation")]
    fn test_success_applied_to_populated_aborts() {
        let _ = PostsState::Populated { data: complete() }.with_users(Ok(vec![]));
    }

    #[test]
    fn test_partial_completed_requires_all_three() {
        let data = complete();
        let partial = Partial {
            posts: Some(data.posts.clone()),
            users: Some(data.users.clone()),
            comments: None,
        };
        assert!(partial.completed().is_none());

        let partial = Partial {
            comments: Some(data.comments.clone()),
            ..partial
        };
        assert_eq!(partial.completed(), Some(data));
    }
}
