//! The remote operations the store depends on

use std::future::Future;

use crate::models::{NewSong, NewUser, Song, SongId, User, UserId, UserStatus};
use crate::network::error::ApiResult;

/// Request/response access to the music service.
///
/// Implementations hold no state between calls and must report every
/// failure as a normalized [`ApiError`](crate::network::ApiError).
pub trait MusicApi: Send + Sync {
    /// `GET /songs`
    fn list_songs(&self) -> impl Future<Output = ApiResult<Vec<Song>>> + Send;

    /// `POST /songs`
    fn create_song(&self, draft: NewSong) -> impl Future<Output = ApiResult<Song>> + Send;

    /// `POST /users`
    fn create_user(&self, draft: NewUser) -> impl Future<Output = ApiResult<User>> + Send;

    /// `PUT /users/{id}/status`
    fn update_user_status(
        &self,
        user_id: UserId,
        status: UserStatus,
    ) -> impl Future<Output = ApiResult<User>> + Send;

    /// `GET /users/{id}`, library included
    fn get_user_profile(&self, user_id: UserId) -> impl Future<Output = ApiResult<User>> + Send;

    /// `POST /users/{id}/songs`
    fn add_song_to_user(
        &self,
        user_id: UserId,
        song_id: SongId,
    ) -> impl Future<Output = ApiResult<User>> + Send;
}
