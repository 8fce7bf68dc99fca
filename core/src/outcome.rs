//! Mapping of backend responses to user-facing outcomes.
//!
//! The plotting server answers with a JSON object carrying `message` on
//! success or `error` on failure. Any status outside 2xx is a failure
//! whatever the body says.

use serde::Deserialize;
use std::fmt;

use crate::config::{FAILURE_FALLBACK_MESSAGE, SUCCESS_FALLBACK_MESSAGE};
use crate::error::RequestError;

/// Result of one submission, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success(String),
    Failure(String),
}

/// Body of a backend reply. Both fields are optional.
#[derive(Debug, Default, Deserialize)]
struct ServerReply {
    #[serde(default)]
    message: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

impl ServerReply {
    fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

fn as_text(value: Option<serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

impl RequestOutcome {
    /// Map an HTTP status and raw body to an outcome.
    pub fn from_response(status: u16, body: &str) -> Self {
        let reply = ServerReply::parse(body);
        if (200..300).contains(&status) {
            log::debug!("Backend replied {}: {}", status, body);
            RequestOutcome::Success(
                as_text(reply.message).unwrap_or_else(|| SUCCESS_FALLBACK_MESSAGE.to_string()),
            )
        } else {
            let err = RequestError::Status {
                status,
                body: body.to_string(),
            };
            log::error!("Error uploading files: {}", err);
            RequestOutcome::Failure(
                as_text(reply.error).unwrap_or_else(|| FAILURE_FALLBACK_MESSAGE.to_string()),
            )
        }
    }

    /// Outcome of a request that never produced a response.
    pub fn from_transport_error(err: &RequestError) -> Self {
        log::error!("Error uploading files: {}", err);
        RequestOutcome::Failure(FAILURE_FALLBACK_MESSAGE.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success(_))
    }

    /// Server-supplied or fallback text, without decoration.
    pub fn message(&self) -> &str {
        match self {
            RequestOutcome::Success(msg) | RequestOutcome::Failure(msg) => msg,
        }
    }
}

impl fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestOutcome::Success(msg) => f.write_str(msg),
            RequestOutcome::Failure(msg) => write!(f, "Error: {}", msg),
        }
    }
}
