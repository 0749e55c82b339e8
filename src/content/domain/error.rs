//! Error types for content domain validation.

use thiserror::Error;

/// Errors returned while constructing content domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentDomainError {
    /// The article identifier is empty after trimming.
    #[error("article identifier must not be empty")]
    EmptyArticleId,

    /// The article identifier contains whitespace or control characters.
    #[error("invalid article identifier '{0}'")]
    InvalidArticleId(String),
}

/// Error returned while parsing a message type discriminant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown message type: {0}")]
pub struct ParseMessageTypeError(pub String);
