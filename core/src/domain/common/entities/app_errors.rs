use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Caller-correctable input: empty or unreadable image, malformed request.
    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Not found")]
    NotFound,

    /// Any model or remote service call failed or returned schema-invalid data.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal server error")]
    InternalServerError,
}
