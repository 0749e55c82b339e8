//! Published discussion comments and their normalized authors.

use super::{GuestProfile, MessageType};
use serde::{Deserialize, Serialize};

/// Display identity of a comment author.
///
/// Never persisted; built fresh on every read by
/// [`resolve_comment_user`](super::resolve_comment_user). `user_name`,
/// `email`, `profile_pic` and `img_rotation` always hold the effective
/// display identity, whichever source supplied it. The alias and guest
/// fields carry their source columns verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentUser {
    /// Platform user identifier, zero for guests.
    pub ifr_user_id: i64,
    /// Effective display name.
    pub user_name: String,
    /// Effective email address.
    pub email: String,
    /// Effective picture URL.
    pub profile_pic: String,
    /// Effective picture rotation in degrees.
    pub img_rotation: i32,
    /// Alias name configured by the platform user.
    pub alias: String,
    /// Alias picture URL.
    pub alias_profile_pic: String,
    /// Alias picture rotation in degrees.
    pub alias_img_rotation: i32,
    /// Session token, only ever set by the session layer.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,
    /// Whether the author is a registered platform user.
    pub is_ifragasatt_user: bool,
    /// Name supplied by a guest when writing the comment.
    pub guest_user_name: String,
    /// Email supplied by a guest when writing the comment.
    pub guest_email: String,
}

impl CommentUser {
    /// Returns the guest display profile when the author is a guest.
    #[must_use]
    pub fn guest_profile(&self) -> Option<GuestProfile> {
        if self.is_ifragasatt_user || self.guest_user_name.is_empty() {
            return None;
        }
        Some(GuestProfile {
            id: 0,
            display_name: self.guest_user_name.clone(),
            profile_pic: String::new(),
            image_rotation: 0,
        })
    }
}

/// A single published discussion message.
///
/// The list assembler returns comments flat; `parent_comment_guid` names the
/// comment being replied to and `report_guid` the curated report the comment
/// belongs to. Both are empty when unset. See
/// [`CommentThreads`](super::CommentThreads) for rebuilding reply threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Internal comment identifier.
    pub id: i64,
    /// Article the comment belongs to.
    pub article_id: String,
    /// Internal broadcast identifier.
    pub broadcast_id: i64,
    /// Client-visible identifier.
    #[serde(rename = "guid")]
    pub comment_guid: String,
    /// Identifier of the grouping report, empty when ungrouped.
    pub report_guid: String,
    /// Identifier of the parent comment, empty for top-level comments.
    pub parent_comment_guid: String,
    /// Moderation status; assembled comments are always `published`.
    pub status: String,
    /// Whether the comment is pinned to the top of the thread.
    pub is_pinned: bool,
    /// Comment body.
    pub text: String,
    /// Normalized author identity.
    #[serde(rename = "commentUser")]
    pub user: CommentUser,
    /// Time the author wrote the comment.
    pub written_at: String,
    /// Last edit timestamp.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub updated_at: String,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    /// Deletion timestamp; empty for every assembled comment.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub deleted_at: String,
    /// Always [`MessageType::ThreadComment`].
    pub message_type: MessageType,
    /// Moderator who published the comment.
    pub published_by_user_id: i64,
}

impl Comment {
    /// Returns `true` when the comment replies to another comment.
    #[must_use]
    pub fn is_reply(&self) -> bool {
        !self.parent_comment_guid.is_empty()
    }
}
