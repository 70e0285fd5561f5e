//! Error types for progress persistence

/// Storage backend errors
///
/// Load failures degrade to an empty completion set; save failures are
/// logged and swallowed. Neither is fatal to the session.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying I/O failure
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StorageError::Backend("quota exceeded".to_string());
        assert_eq!(err.to_string(), "storage backend error: quota exceeded");
    }
}
