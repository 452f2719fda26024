//! HTTP client wrapper - executes catalog requests and normalizes failures

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::constants::APP_VERSION;
use crate::models::{
    NewSong, NewUser, Song, SongId, SongLink, StatusUpdate, User, UserId, UserStatus,
};
use crate::network::api::MusicApi;
use crate::network::error::{ApiError, ApiResult};

/// Stateless client for the music service
#[derive(Clone, Debug)]
pub struct MusicClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl MusicClient {
    /// Build a client for the configured endpoint
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .user_agent(format!("music-catalog-client/{}", APP_VERSION))
            .build()
            .context("failed to build HTTP client")?;

        Ok(MusicClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Build a client from `~/.music-catalog/config.yaml` and the environment
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::load()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.http.get(self.url(path));
        self.execute(request, Method::GET, path).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.http.request(method.clone(), self.url(path)).json(body);
        self.execute(request, method, path).await
    }

    /// Send once, then decode a 2xx body or normalize whatever went wrong
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        method: Method,
        path: &str,
    ) -> ApiResult<T> {
        tracing::debug!(%method, path, "Making {} request to {}", method, path);

        let result = async {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::from_transport(&e, self.timeout_secs))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::from_transport(&e, self.timeout_secs))?;

            if !status.is_success() {
                return Err(ApiError::from_response(status, &body));
            }
            serde_json::from_str::<T>(&body).map_err(|e| ApiError::malformed(&e))
        }
        .await;

        if let Err(err) = &result {
            tracing::error!(
                %method,
                path,
                status = err.status,
                kind = ?err.kind,
                details = ?err.details,
                "API error: {}",
                err.message
            );
        }
        result
    }
}

impl MusicApi for MusicClient {
    async fn list_songs(&self) -> ApiResult<Vec<Song>> {
        self.get("/songs").await
    }

    async fn create_song(&self, draft: NewSong) -> ApiResult<Song> {
        self.send_json(Method::POST, "/songs", &draft).await
    }

    async fn create_user(&self, draft: NewUser) -> ApiResult<User> {
        self.send_json(Method::POST, "/users", &draft).await
    }

    async fn update_user_status(&self, user_id: UserId, status: UserStatus) -> ApiResult<User> {
        let path = format!("/users/{}/status", user_id);
        self.send_json(Method::PUT, &path, &StatusUpdate { status }).await
    }

    async fn get_user_profile(&self, user_id: UserId) -> ApiResult<User> {
        self.get(&format!("/users/{}", user_id)).await
    }

    async fn add_song_to_user(&self, user_id: UserId, song_id: SongId) -> ApiResult<User> {
        let path = format!("/users/{}/songs", user_id);
        self.send_json(Method::POST, &path, &SongLink { song_id }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ClientConfig {
            base_url: String::from("http://catalog.local:9000/"),
            ..Default::default()
        };
        let client = MusicClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://catalog.local:9000");
        assert_eq!(client.url("/songs"), "http://catalog.local:9000/songs");
    }
}
