use thiserror::Error;

/// Errors surfaced by the resource services.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (unreachable host, aborted
    /// connection, malformed response body).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. `message` carries the
    /// response body text, which may be empty.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}
