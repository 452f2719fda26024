//! Catalog entities and request bodies as exchanged with the music service
//!
//! Rust field names are English; the service speaks its own JSON vocabulary
//! (`titulo`, `nombre`, `estado`, ...) which the serde attributes map onto.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned song identifier
pub type SongId = i64;

/// Server-assigned user identifier
pub type UserId = i64;

/// Anything carrying a server-assigned identity
pub trait Identified {
    fn id(&self) -> i64;
}

/// A song in the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "artista")]
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Length in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        rename = "coverImage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cover_image: Option<String>,
    #[serde(
        rename = "createdAt",
        default,
        with = "timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "updatedAt",
        default,
        with = "timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identified for Song {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Account status of a user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[serde(rename = "activo")]
    Active,
    #[serde(rename = "inactivo")]
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "activo",
            UserStatus::Inactive => "inactivo",
        }
    }

    /// The opposite status, handy for toggle buttons
    pub fn toggled(&self) -> UserStatus {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user of the catalog, optionally with their song library attached
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "estado")]
    pub status: UserStatus,
    #[serde(
        rename = "createdAt",
        default,
        with = "timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "updatedAt",
        default,
        with = "timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    /// The user's library, only sent by endpoints that embed it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<Vec<Song>>,
}

impl User {
    /// Whether the attached library contains the given song
    pub fn has_song(&self, song_id: SongId) -> bool {
        self.music
            .as_deref()
            .is_some_and(|songs| songs.iter().any(|s| s.id == song_id))
    }
}

impl Identified for User {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Draft for `POST /songs`
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewSong {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "artista")]
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "coverImage", skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl NewSong {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        NewSong {
            title: title.into(),
            artist: artist.into(),
            ..Default::default()
        }
    }

    pub fn album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }
}

/// Draft for `POST /users`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewUser {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        NewUser {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Body of `PUT /users/{id}/status`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StatusUpdate {
    #[serde(rename = "estado")]
    pub status: UserStatus,
}

/// Body of `POST /users/{id}/songs`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SongLink {
    #[serde(rename = "songId")]
    pub song_id: SongId,
}

/// Timestamps come as RFC 3339, or without an offset from some backends.
/// The latter are taken as UTC.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
    }

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp `{raw}`"))),
        }
    }
}
