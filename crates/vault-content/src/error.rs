//! Error types for the content boundary

/// Content provider errors
///
/// Surfaced as a terminal "failed to load" state in the content view, or as
/// a fallback message in chat. The core never retries automatically.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Transport-level failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the request
    #[error("backend error: {0}")]
    Backend(String),

    /// Response did not match the expected content shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
