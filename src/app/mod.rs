//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`AppMessage`] - Messages from spawned fetch tasks
//!
//! `App` owns both screen state machines and is their only writer. Fetch
//! tasks run concurrently on the tokio runtime and report back over an
//! mpsc channel; results are applied sequentially in the update loop, so
//! arrival order is arbitrary but mutation never races.

mod messages;

pub use messages::AppMessage;

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::models::Post;
use crate::state::{DetailState, PostsState};
use crate::store::Store;
use crate::traits::HttpClient;

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Posts,
    Detail,
}

/// One visit to the detail screen.
///
/// Dropped wholesale when the user navigates back; the generation counter
/// makes sure results still in flight for a dead session are ignored.
#[derive(Debug)]
pub struct DetailSession {
    pub post: Post,
    pub state: DetailState,
    generation: u64,
}

/// Top-level application state.
pub struct App<C> {
    api: Arc<ApiClient<C>>,
    tx: mpsc::UnboundedSender<AppMessage>,
    store: Option<Store>,

    pub screen: Screen,
    pub posts_state: PostsState,
    pub posts_index: usize,
    pub detail: Option<DetailSession>,
    pub should_quit: bool,

    posts_generation: u64,
    detail_generation: u64,
}

impl<C: HttpClient + Clone + Send + Sync + 'static> App<C> {
    /// Create the app, seeding the list from the store's last-known-good
    /// data so cached content renders before the first refresh completes.
    pub fn new(
        api: ApiClient<C>,
        store: Option<Store>,
        tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        let posts_state = match store.as_ref().and_then(Store::get) {
            Some(data) => PostsState::Populated { data },
            None => PostsState::Empty,
        };

        Self {
            api: Arc::new(api),
            tx,
            store,
            screen: Screen::Posts,
            posts_state,
            posts_index: 0,
            detail: None,
            should_quit: false,
            posts_generation: 0,
            detail_generation: 0,
        }
    }

    // =========================================================================
    // Refresh commands
    // =========================================================================

    /// Startup: unconditionally kick off the first refresh. Cached data, if
    /// any, is carried as stale while it runs.
    pub fn on_start(&mut self) {
        self.refresh_posts();
    }

    /// The posts screen regained focus (e.g. returning from detail):
    /// refresh only if there is nothing in flight and nothing populated.
    pub fn on_refocus(&mut self) {
        match self.posts_state {
            PostsState::Empty | PostsState::Failed { .. } => self.refresh_posts(),
            PostsState::Loading { .. } | PostsState::Populated { .. } => {}
        }
    }

    /// Manual refresh / retry, for whichever screen is active.
    pub fn refresh_current(&mut self) {
        match self.screen {
            Screen::Posts => self.refresh_posts(),
            Screen::Detail => self.refresh_detail(),
        }
    }

    /// Start a new posts fetch cycle. The state machine rejects the start
    /// while a cycle is already in flight.
    pub fn refresh_posts(&mut self) {
        let Some(next) = self.posts_state.after_starting_fetch() else {
            tracing::debug!("posts refresh ignored, fetch already in flight");
            return;
        };
        self.posts_state = next;
        self.posts_generation += 1;

        let generation = self.posts_generation;

        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.get_posts().await;
            let _ = tx.send(AppMessage::PostsFetched { generation, result });
        });

        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.get_users().await;
            let _ = tx.send(AppMessage::UsersFetched { generation, result });
        });

        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.get_comments().await;
            let _ = tx.send(AppMessage::CommentsFetched { generation, result });
        });
    }

    /// Start a new detail fetch cycle for the active session.
    fn refresh_detail(&mut self) {
        let Some(session) = self.detail.as_mut() else {
            return;
        };
        if session.state.is_loading() {
            tracing::debug!("detail refresh ignored, fetch already in flight");
            return;
        }
        session.state = session.state.after_starting_fetch();

        let generation = session.generation;

        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.get_users().await;
            let _ = tx.send(AppMessage::DetailUsersFetched { generation, result });
        });

        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.get_comments().await;
            let _ = tx.send(AppMessage::DetailCommentsFetched { generation, result });
        });
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move the list selection down.
    pub fn select_next(&mut self) {
        let count = self.posts_state.posts().len();
        if count > 0 && self.posts_index + 1 < count {
            self.posts_index += 1;
        }
    }

    /// Move the list selection up.
    pub fn select_previous(&mut self) {
        self.posts_index = self.posts_index.saturating_sub(1);
    }

    /// Open the detail screen for the selected post and start its fetch
    /// cycle.
    pub fn open_selected(&mut self) {
        let Some(post) = self.posts_state.posts().get(self.posts_index).cloned() else {
            return;
        };
        self.detail_generation += 1;
        self.detail = Some(DetailSession {
            post,
            state: DetailState::Empty,
            generation: self.detail_generation,
        });
        self.screen = Screen::Detail;
        self.refresh_detail();
    }

    /// Tear down the detail session and return to the list.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.screen = Screen::Posts;
        self.on_refocus();
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Translate a key event into an app command.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Posts => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('r') => self.refresh_current(),
                KeyCode::Down | KeyCode::Char('j') => self.select_next(),
                KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
                KeyCode::Enter => self.open_selected(),
                _ => {}
            },
            Screen::Detail => match key.code {
                KeyCode::Char('q') | KeyCode::Esc | KeyCode::Backspace => self.close_detail(),
                KeyCode::Char('r') => self.refresh_current(),
                _ => {}
            },
        }
    }

    // =========================================================================
    // Message handling
    // =========================================================================

    /// Apply a fetch completion to the owning state machine.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::PostsFetched { generation, result } => {
                self.apply_posts_transition(generation, |state| state.with_posts(result));
            }
            AppMessage::UsersFetched { generation, result } => {
                self.apply_posts_transition(generation, |state| state.with_users(result));
            }
            AppMessage::CommentsFetched { generation, result } => {
                self.apply_posts_transition(generation, |state| state.with_comments(result));
            }
            AppMessage::DetailUsersFetched { generation, result } => {
                self.apply_detail_transition(generation, |state, post| {
                    state.with_users(result, post)
                });
            }
            AppMessage::DetailCommentsFetched { generation, result } => {
                self.apply_detail_transition(generation, |state, post| {
                    state.with_comments(result, post)
                });
            }
        }
    }

    /// Results are only valid while their own cycle is still in flight.
    /// A failure concludes the cycle early, so the remaining in-flight
    /// completions of that cycle arrive here and are dropped.
    fn apply_posts_transition<F>(&mut self, generation: u64, transition: F)
    where
        F: FnOnce(PostsState) -> PostsState,
    {
        if generation != self.posts_generation || !self.posts_state.is_loading() {
            tracing::debug!(generation, "dropping late posts fetch result");
            return;
        }

        let state = std::mem::take(&mut self.posts_state);
        self.posts_state = transition(state);
        self.posts_index = self
            .posts_index
            .min(self.posts_state.posts().len().saturating_sub(1));

        if let PostsState::Populated { data } = &self.posts_state {
            if let Some(store) = &self.store {
                if let Err(e) = store.set(data) {
                    tracing::warn!(error = %e, "failed to persist data set");
                }
            }
        }
    }

    fn apply_detail_transition<F>(&mut self, generation: u64, transition: F)
    where
        F: FnOnce(DetailState, &Post) -> DetailState,
    {
        let Some(session) = self.detail.as_mut() else {
            tracing::debug!(generation, "dropping fetch result for closed detail screen");
            return;
        };
        if generation != session.generation || !session.state.is_loading() {
            tracing::debug!(generation, "dropping late detail fetch result");
            return;
        }

        let state = std::mem::take(&mut session.state);
        let post = session.post.clone();
        session.state = transition(state, &post);
    }
}
