//! Identifier types for the content domain.

use super::ContentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Public identifier of a broadcast, shared with the publishing site.
///
/// Every assembler is scoped by this value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    /// Creates a validated article identifier.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ContentDomainError::EmptyArticleId`] when the value is empty
    /// after trimming, or [`ContentDomainError::InvalidArticleId`] when it
    /// contains inner whitespace or control characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ContentDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ContentDomainError::EmptyArticleId);
        }
        if normalized
            .chars()
            .any(|ch| ch.is_whitespace() || ch.is_control())
        {
            return Err(ContentDomainError::InvalidArticleId(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ArticleId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
