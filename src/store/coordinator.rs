//! Music store - runs one remote call per action and folds the result into state
//!
//! State lives in a `watch` channel: actions mutate it through the sender,
//! consumers read snapshots or subscribe for change notifications.

use std::future::Future;

use tokio::sync::watch;

use crate::models::{NewSong, NewUser, Song, SongId, User, UserId, UserStatus};
use crate::network::{ApiResult, MusicApi};
use crate::store::operation::Operation;
use crate::store::state::StoreState;

/// Clears an action's busy flag on every exit path, including a dropped future
struct BusyGuard<'a> {
    state: &'a watch::Sender<StoreState>,
    op: Operation,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let op = self.op;
        self.state.send_modify(|state| state.finish(op));
    }
}

/// State coordinator between the UI and the music service
pub struct MusicStore<A> {
    api: A,
    state: watch::Sender<StoreState>,
}

impl<A: MusicApi> MusicStore<A> {
    /// Start with empty collections and no current user
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        MusicStore { api, state }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Borrow the current state.
    ///
    /// The guard holds the channel's read lock. Every action and
    /// [`clear_error`](Self::clear_error) takes the write lock, so calling one
    /// while a guard is alive on the same thread deadlocks, with or without an
    /// `.await` in between. Drop the guard first, or use [`snapshot`](Self::snapshot).
    pub fn state(&self) -> watch::Ref<'_, StoreState> {
        self.state.borrow()
    }

    /// Read-only view notified after every state change
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn find_song(&self, id: SongId) -> Option<Song> {
        self.state.borrow().find_song(id).cloned()
    }

    pub fn find_user(&self, id: UserId) -> Option<User> {
        self.state.borrow().find_user(id).cloned()
    }

    pub fn clear_error(&self) {
        self.state.send_modify(|state| state.clear_error());
    }

    /// Replace the song collection with the service's full list
    pub async fn fetch_songs(&self) -> ApiResult<Vec<Song>> {
        self.run(
            Operation::FetchSongs,
            || self.api.list_songs(),
            |state, songs| state.replace_songs(songs.clone()),
        )
        .await
    }

    pub async fn create_song(&self, draft: NewSong) -> ApiResult<Song> {
        self.run(
            Operation::CreateSong,
            || self.api.create_song(draft),
            |state, song| state.upsert_song(song.clone()),
        )
        .await
    }

    pub async fn create_user(&self, draft: NewUser) -> ApiResult<User> {
        tracing::debug!(name = %draft.name, email = %draft.email, "Creating user");
        self.run(
            Operation::CreateUser,
            || self.api.create_user(draft),
            |state, user| state.upsert_user(user.clone()),
        )
        .await
    }

    pub async fn update_user_status(&self, user_id: UserId, status: UserStatus) -> ApiResult<User> {
        self.run(
            Operation::UpdateUserStatus,
            || self.api.update_user_status(user_id, status),
            |state, user| state.reconcile_user(user.clone()),
        )
        .await
    }

    /// Load a profile with its library and make it the current user
    pub async fn fetch_user_profile(&self, user_id: UserId) -> ApiResult<User> {
        self.run(
            Operation::FetchUser,
            || self.api.get_user_profile(user_id),
            |state, user| state.set_current_user(user.clone()),
        )
        .await
    }

    /// Only the user entries are refreshed; the song collection is left alone
    pub async fn add_song_to_user(&self, user_id: UserId, song_id: SongId) -> ApiResult<User> {
        self.run(
            Operation::AddSongToUser,
            || self.api.add_song_to_user(user_id, song_id),
            |state, user| state.reconcile_user(user.clone()),
        )
        .await
    }

    fn begin(&self, op: Operation) -> BusyGuard<'_> {
        self.state.send_modify(|state| state.begin(op));
        BusyGuard {
            state: &self.state,
            op,
        }
    }

    /// Shared action shape: flag busy, call once, reconcile or record the error
    async fn run<T, Fut>(
        &self,
        op: Operation,
        call: impl FnOnce() -> Fut,
        reconcile: impl FnOnce(&mut StoreState, &T),
    ) -> ApiResult<T>
    where
        Fut: Future<Output = ApiResult<T>>,
    {
        let _busy = self.begin(op);
        tracing::debug!(operation = %op, "Action started");

        match call().await {
            Ok(value) => {
                self.state.send_modify(|state| reconcile(state, &value));
                tracing::debug!(operation = %op, "Action completed");
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(
                    operation = %op,
                    status = err.status,
                    "Action failed: {}",
                    err.message
                );
                self.state.send_modify(|state| state.set_error(err.clone()));
                Err(err)
            }
        }
    }
}
