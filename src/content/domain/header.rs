//! Display rank of header items.

use super::MessageType;
use serde::{Deserialize, Serialize};

/// Maps a header item to its display rank.
///
/// Ranks are not required to be contiguous. Item identifiers are assumed
/// unique within a broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSortOrder {
    /// Identifier of the ranked item.
    #[serde(rename = "itemGuid")]
    pub guid: String,
    /// Display rank.
    pub index: i32,
    /// Always [`MessageType::HeaderSortOrder`].
    pub message_type: MessageType,
}
