//! Error types for coursecal.

use thiserror::Error;

/// Errors that can occur in coursecal operations.
#[derive(Error, Debug)]
pub enum CourseCalError {
    /// A form failed validation. The message is meant to be shown inline.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid time '{0}'")]
    InvalidTime(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CourseCalError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CourseCalError::Validation(_))
    }
}

/// Result type alias for coursecal operations.
pub type CourseCalResult<T> = Result<T, CourseCalError>;
