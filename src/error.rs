//! Error types for comment-tree operations.
//!
//! The tree builder and the comment-list read operations are total: malformed
//! parent references degrade to root attachment and unknown identifiers yield
//! `None`, never an error. The error type exists for the configuration
//! surface (display-profile validation).

use thiserror::Error;

/// Result type alias for comment-tree operations.
pub type Result<T> = std::result::Result<T, CommentError>;

/// Main error type for comment-tree operations.
#[derive(Error, Debug)]
pub enum CommentError {
    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CommentError {
    /// Creates a new validation error.
    pub fn validation<T: ToString>(msg: T) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Creates a new configuration error.
    pub fn config<T: ToString>(msg: T) -> Self {
        Self::Config(msg.to_string())
    }
}
