//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base URL of the music catalog service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Directory under the user's home holding the client configuration
pub const CONFIG_DIR_NAME: &str = ".music-catalog";

/// Configuration file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment variable overriding the service base URL
pub const ENV_BASE_URL: &str = "MUSIC_CATALOG_API_URL";

/// Environment variable overriding the request timeout (seconds)
pub const ENV_TIMEOUT_SECS: &str = "MUSIC_CATALOG_TIMEOUT_SECS";

/// Log file written by [`crate::logging::init`]
pub const LOG_FILE_NAME: &str = "music-catalog.log";

/// Message used when a failure carries no usable description
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// Status reported when the transport produced no HTTP status
pub const FALLBACK_ERROR_STATUS: u16 = 500;

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
