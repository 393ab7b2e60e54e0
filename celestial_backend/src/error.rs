//! Error types for configuration, parsing and reminder output.

/// Result type for reminder operations
pub type ReminderResult<T> = Result<T, ReminderError>;

/// Error type for reminder operations
#[derive(Debug, thiserror::Error)]
pub enum ReminderError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
