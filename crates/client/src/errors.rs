use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    /// Non-2xx answer carrying the server's JSON error body.
    #[error("{status} {error}: {}", .detail.as_deref().unwrap_or("-"))]
    Api { status: u16, error: String, detail: Option<String>, field: Option<String> },
    #[error("{procedure} is a {expected}, not a {actual}")]
    WrongKind { procedure: &'static str, expected: &'static str, actual: &'static str },
    #[error("invalid client configuration: {0}")]
    Config(String),
}

/// Error body as sent by the server.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Parse(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}
