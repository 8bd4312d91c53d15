// src/error.rs
//! Error type surfaced by the API client

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("Network error")]
    Network(#[source] reqwest::Error),

    /// Non-2xx response, normalized to `{code, message}` with the status attached
    #[error("[{code}] {message}")]
    Api {
        status: StatusCode,
        code: String,
        message: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ClientError {
    /// Normalize a failed response body. A JSON object supplies `code` and
    /// `message`; each one it lacks falls back to the status number or reason.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let object = serde_json::from_str::<Value>(body)
            .ok()
            .filter(Value::is_object);

        let code = object
            .as_ref()
            .and_then(|v| v.get("code"))
            .and_then(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| status.as_u16().to_string());
        let message = object
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());

        ClientError::Api {
            status,
            code,
            message,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    pub fn is_code(&self, expected: &str) -> bool {
        self.code() == Some(expected)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}
