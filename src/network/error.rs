//! Normalized failure shape for every remote call
//!
//! Whatever went wrong on the wire (timeout, refused connection, non-2xx
//! status, undecodable body) reaches callers as one [`ApiError`].

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::constants::{FALLBACK_ERROR_MESSAGE, FALLBACK_ERROR_STATUS};

/// Result of a remote call
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure class, kept alongside the status so callers need not guess from numbers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// No response was received
    Network,
    /// No response within the configured timeout
    Timeout,
    /// The service answered with a non-success status
    Service,
    /// The service answered 2xx but the body did not decode
    Malformed,
}

/// A remote failure reduced to `{message, status, details}`
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} (status {status})")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    pub status: u16,
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(kind: ErrorKind, status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        ApiError {
            kind,
            message: if message.trim().is_empty() {
                FALLBACK_ERROR_MESSAGE.to_string()
            } else {
                message
            },
            status,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Normalize a non-success response from its status and raw body.
    ///
    /// Fields are read one by one so an odd shape in one of them never hides
    /// the others.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).unwrap_or(Value::Null);

        let message = text_field(&parsed, "message")
            .or_else(|| text_field(&parsed, "detail"))
            .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

        let details = match parsed.get("details") {
            Some(Value::String(details)) if !details.trim().is_empty() => Some(details.clone()),
            Some(Value::Null) | Some(Value::String(_)) | None => None,
            Some(other) => Some(other.to_string()),
        }
        .or_else(|| status.canonical_reason().map(str::to_string));

        let error = ApiError::new(ErrorKind::Service, status.as_u16(), message);
        match details {
            Some(details) => error.with_details(details),
            None => error,
        }
    }

    /// Normalize a transport-level failure. `timeout_secs` only feeds the message
    pub fn from_transport(err: &reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            return ApiError::new(
                ErrorKind::Timeout,
                FALLBACK_ERROR_STATUS,
                format!("Request timed out after {}s", timeout_secs),
            );
        }

        // A status here means reqwest itself rejected the response
        let status = err
            .status()
            .map(|s| s.as_u16())
            .unwrap_or(FALLBACK_ERROR_STATUS);

        if err.is_decode() {
            return ApiError::new(ErrorKind::Malformed, status, "Malformed response body")
                .with_details(err.to_string());
        }

        let message = if err.is_connect() {
            format!("Connection failed: {}", err)
        } else {
            err.to_string()
        };
        ApiError::new(ErrorKind::Network, status, message)
    }

    /// A 2xx body that did not match the expected shape
    pub fn malformed(err: &serde_json::Error) -> Self {
        ApiError::new(
            ErrorKind::Malformed,
            FALLBACK_ERROR_STATUS,
            "Malformed response body",
        )
        .with_details(err.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND.as_u16()
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

/// A non-blank string field, or a list of strings joined with "; "
fn text_field(body: &Value, key: &str) -> Option<String> {
    let text = match body.get(key)? {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    (!text.trim().is_empty()).then_some(text)
}
