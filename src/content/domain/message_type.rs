//! Discriminant carried by every list entity in a merged content stream.

use super::ParseMessageTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a produced feed entity.
///
/// Clients receiving a heterogeneous stream dispatch on this tag rather than
/// on the shape of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    /// Free-text announcement shown in the header carousel.
    #[serde(rename = "info")]
    Info,
    /// Scoreboard snapshot.
    #[serde(rename = "sportResult")]
    SportResult,
    /// Display rank of a header item.
    #[serde(rename = "headerSortorder")]
    HeaderSortOrder,
    /// Published discussion comment.
    #[serde(rename = "threadComment")]
    ThreadComment,
}

impl MessageType {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::SportResult => "sportResult",
            Self::HeaderSortOrder => "headerSortorder",
            Self::ThreadComment => "threadComment",
        }
    }
}

impl TryFrom<&str> for MessageType {
    type Error = ParseMessageTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "info" => Ok(Self::Info),
            "sportResult" => Ok(Self::SportResult),
            "headerSortorder" => Ok(Self::HeaderSortOrder),
            "threadComment" => Ok(Self::ThreadComment),
            _ => Err(ParseMessageTypeError(value.to_owned())),
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
