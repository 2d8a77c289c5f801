/// Unified error type for object storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Configuration error (malformed endpoint, invalid bucket name, ...)
    ///
    /// Raised while building the client, before any request is issued.
    #[error("Storage configuration error: {0}")]
    Config(String),

    /// An object store request failed
    ///
    /// Request failures surface at first use, not at client construction;
    /// domain layers map them into their own error types.
    #[error("Storage operation '{operation}' failed: {details}")]
    Operation {
        operation: &'static str,
        details: String,
    },
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
