//! Free-text announcements shown in the broadcast header.

use super::{MessageType, User};
use serde::{Deserialize, Serialize};

/// Announcement written by an editor, carrying information that is not part
/// of the regular post flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoText {
    /// Announcement body.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Client-visible identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub guid: String,
    /// Editor who wrote the announcement.
    #[serde(default)]
    pub user: User,
    /// Always [`MessageType::Info`].
    pub message_type: MessageType,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    /// Last edit timestamp.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub updated_at: String,
}
