//! # Music Catalog Client
//!
//! Client-side data layer for a music catalog service.
//!
//! ## Features
//! - Songs: list, create
//! - Users: create, update status, fetch profile with library
//! - Add songs to a user's library
//! - Uniform error shape for every remote failure
//! - Per-action busy flags and change notifications for UI layers
//!
//! ## Architecture
//! - Network Layer (reqwest) - stateless request/response exchanges
//! - Store Layer - owned state, actions, reconciliation by id

pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod network;
pub mod store;

pub use config::ClientConfig;
pub use models::{NewSong, NewUser, Song, SongId, User, UserId, UserStatus};
pub use network::{ApiError, ApiResult, ErrorKind, MusicApi, MusicClient};
pub use store::{MusicStore, Operation, OperationLoading, StoreState};
