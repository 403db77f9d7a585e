//! Uniform failure signal for bounded remote calls.

use thiserror::Error;

/// Why a remote call produced nothing usable. Callers treat every variant alike.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The call did not finish within its bound.
    #[error("remote call timed out")]
    Timeout,
    /// The server answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u32),
    /// Connection, DNS, TLS or protocol failure.
    #[error("transport: {0}")]
    Transport(String),
    /// The body was not the JSON we expected.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The JSON parsed but lacked a field we need.
    #[error("response missing `{0}`")]
    MissingField(&'static str),
    /// The blocking worker running the transfer panicked or was cancelled.
    #[error("transfer task failed: {0}")]
    TaskJoin(String),
}

impl From<curl::Error> for RemoteError {
    fn from(e: curl::Error) -> Self {
        if e.is_operation_timedout() {
            RemoteError::Timeout
        } else {
            RemoteError::Transport(e.to_string())
        }
    }
}
