//! Unified error handling for the admin client.
//!
//! The error taxonomy mirrors what the dashboard surfaced to operators:
//! network/timeout failures, structured 4xx validation bodies flattened
//! into one message, the special-cased session expiry after a failed
//! refresh, and client-side form validation that blocks the request
//! entirely.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::auth::TokenStoreError;
use crate::forms::FormError;

/// Errors that can occur when talking to the admin API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The uniform request timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The backend rejected the request with a structured error body.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Flattened per-field messages.
        message: String,
    },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A request path could not be resolved against the base URL.
    #[error("invalid request path: {0}")]
    InvalidPath(String),

    /// The access token expired and the one-shot refresh failed; stored
    /// tokens have been cleared and the operator must sign in again.
    #[error("session expired, sign in again")]
    SessionExpired,

    /// A response body could not be decoded.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Client-side validation rejected the input before any request.
    #[error("validation error: {0}")]
    Validation(#[from] FormError),

    /// Reading or writing the token store failed.
    #[error("token storage error: {0}")]
    TokenStore(#[from] TokenStoreError),
}

/// A per-field message in a backend error body: either a single string
/// or an array of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldMessage {
    One(String),
    Many(Vec<String>),
}

impl FieldMessage {
    fn join(&self) -> String {
        match self {
            Self::One(msg) => msg.clone(),
            Self::Many(msgs) => msgs.join(", "),
        }
    }
}

/// Keys whose messages stand alone rather than naming a field.
const BARE_KEYS: &[&str] = &["detail", "message", "error", "non_field_errors"];

/// Flatten a structured backend error body into a single user-facing
/// message.
///
/// Bodies are maps of field name to message-or-message-list, with
/// `detail`-style keys carrying unprefixed messages. Returns `None` when
/// the body is not JSON in that shape.
#[must_use]
pub fn flatten_error_body(body: &str) -> Option<String> {
    let fields: BTreeMap<String, FieldMessage> = serde_json::from_str(body).ok()?;
    if fields.is_empty() {
        return None;
    }

    let message = fields
        .iter()
        .map(|(field, msg)| {
            if BARE_KEYS.contains(&field.as_str()) {
                msg.join()
            } else {
                format!("{field}: {}", msg.join())
            }
        })
        .collect::<Vec<_>>()
        .join("; ");

    Some(message)
}
