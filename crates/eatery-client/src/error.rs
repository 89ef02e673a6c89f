//! Error normalization for the eatery API
//!
//! Every failed call collapses to a single user-presentable message plus a
//! status code before it leaves this crate. Server-supplied messages are
//! preferred; transport problems that never produced a response fall back to
//! canned texts.

use serde_json::Value;
use thiserror::Error;

/// Message for the local connectivity gate (synthesized, status 503).
pub const NO_CONNECTION_MESSAGE: &str = "No internet connection.";

const TIMEOUT_MESSAGE: &str = "No Response From Server.";
const UNREACHABLE_MESSAGE: &str = "Server Is Not Available.";
const NETWORK_MESSAGE: &str = "No Internet connection.";

/// A normalized API failure
#[derive(Debug, Error)]
pub enum ApiError {
    /// The connectivity probe reported no reachability; no request was sent.
    #[error("{}", NO_CONNECTION_MESSAGE)]
    Offline,

    /// The request never produced an HTTP response (timeout, refused
    /// connection, dropped network, undecodable body).
    #[error("{message}")]
    Transport {
        /// Canned or transport-derived description
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("{message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body
        message: String,
        /// Parsed response body, when there was one
        body: Option<Value>,
    },
}

impl ApiError {
    /// Status code associated with this failure
    ///
    /// Offline is reported as 503 even though no server was involved.
    /// Transport failures have no status at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Offline => Some(503),
            ApiError::Transport { .. } => None,
            ApiError::Server { status, .. } => Some(*status),
        }
    }

    /// Whether the server signalled an expired session
    ///
    /// Recognized as a plain 401, or the 500 the backend emits with a
    /// "jwt expired" message. Nothing reacts to this yet; callers that want
    /// a forced logout must wire it up themselves.
    pub fn is_auth_expired(&self) -> bool {
        match self {
            ApiError::Server { status: 401, .. } => true,
            ApiError::Server {
                status: 500,
                message,
                ..
            } => message == "jwt expired",
            _ => false,
        }
    }

    /// Normalize a non-success HTTP response into a server error
    pub(crate) fn from_response(status: u16, body_text: &str) -> Self {
        let body = serde_json::from_str::<Value>(body_text).ok();
        let message = extract_message(status, body.as_ref(), body_text);
        ApiError::Server {
            status,
            message,
            body,
        }
    }

    /// Normalize a reqwest failure that never yielded a response
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            TIMEOUT_MESSAGE.to_string()
        } else if err.is_connect() {
            UNREACHABLE_MESSAGE.to_string()
        } else if err.is_decode() {
            err.to_string()
        } else {
            NETWORK_MESSAGE.to_string()
        };
        ApiError::Transport { message }
    }
}

/// Pick the most specific message a response carries.
///
/// Priority: explicit `error.message` object, then `message`, then `msg`,
/// then a raw string body, then a generic status line.
fn extract_message(status: u16, body: Option<&Value>, body_text: &str) -> String {
    if let Some(value) = body {
        if let Some(msg) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
        {
            return msg.to_string();
        }
        if let Some(msg) = value.get("message").and_then(Value::as_str) {
            return msg.to_string();
        }
        if let Some(msg) = value.get("msg").and_then(Value::as_str) {
            return msg.to_string();
        }
        if let Some(msg) = value.as_str() {
            return msg.to_string();
        }
    }
    let raw = body_text.trim();
    if !raw.is_empty() {
        return raw.to_string();
    }
    format!("Request failed with status {status}")
}
