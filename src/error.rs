use thiserror::Error;

/// A failed subjects fetch.
///
/// The list page treats every variant the same way; the split only exists so
/// the log line says what went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },
    #[error("failed to decode subjects response: {0}")]
    Decode(#[from] serde_json::Error),
}
