//! Network layer - request/response exchanges with the music service
//!
//! [`MusicClient`] talks HTTP; the store only sees the [`MusicApi`] trait and
//! the normalized [`ApiError`].

pub mod api;
pub mod client;
pub mod error;

pub use api::MusicApi;
pub use client::MusicClient;
pub use error::{ApiError, ApiResult, ErrorKind};
