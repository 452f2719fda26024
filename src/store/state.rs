//! Store state - last known server data plus busy/error flags, no I/O
//!
//! Consumers only get getters. Mutation is reserved to the store actions,
//! and every mutation replaces whole entities matched by id.

use crate::models::{Identified, Song, SongId, User, UserId};
use crate::network::ApiError;
use crate::store::operation::{InFlight, Operation, OperationLoading};

/// Everything the UI can observe
#[derive(Clone, Debug, Default)]
pub struct StoreState {
    songs: Vec<Song>,
    users: Vec<User>,
    current_user: Option<User>,
    error: Option<ApiError>,
    in_flight: InFlight,
}

impl StoreState {
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The user whose profile is being viewed
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Error of the most recent failed action, cleared when the next one starts
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn operations(&self) -> OperationLoading {
        self.in_flight.flags()
    }

    pub fn is_busy(&self, op: Operation) -> bool {
        self.in_flight.count(op) > 0
    }

    /// True while any action is in flight
    pub fn is_loading(&self) -> bool {
        self.operations().any()
    }

    pub fn find_song(&self, id: SongId) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    pub fn find_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub(crate) fn begin(&mut self, op: Operation) {
        self.in_flight.begin(op);
        self.error = None;
    }

    pub(crate) fn finish(&mut self, op: Operation) {
        self.in_flight.finish(op);
    }

    pub(crate) fn set_error(&mut self, error: ApiError) {
        self.error = Some(error);
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn replace_songs(&mut self, songs: Vec<Song>) {
        self.songs = songs;
    }

    pub(crate) fn upsert_song(&mut self, song: Song) {
        upsert(&mut self.songs, song);
    }

    pub(crate) fn upsert_user(&mut self, user: User) {
        self.refresh_current_user(&user);
        upsert(&mut self.users, user);
    }

    /// Replace a known user and the current user if they match. Unknown ids are not added
    pub(crate) fn reconcile_user(&mut self, user: User) {
        self.refresh_current_user(&user);
        replace(&mut self.users, user);
    }

    /// Show a profile, keeping the collection entry in step with it
    pub(crate) fn set_current_user(&mut self, user: User) {
        replace(&mut self.users, user.clone());
        self.current_user = Some(user);
    }

    fn refresh_current_user(&mut self, user: &User) {
        if let Some(current) = self.current_user.as_mut() {
            if current.id == user.id {
                *current = user.clone();
            }
        }
    }
}

/// Replace the entry with the same id in place, if there is one
fn replace<T: Identified>(items: &mut [T], item: T) {
    if let Some(slot) = items.iter_mut().find(|existing| existing.id() == item.id()) {
        *slot = item;
    }
}

fn upsert<T: Identified>(items: &mut Vec<T>, item: T) {
    if let Some(slot) = items.iter_mut().find(|existing| existing.id() == item.id()) {
        *slot = item;
    } else {
        items.push(item);
    }
}
