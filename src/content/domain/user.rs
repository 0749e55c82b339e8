//! Upstream identity records supplied by the platform account service.

use serde::{Deserialize, Serialize};

/// Registered platform user.
///
/// Only display fields are populated by the content assemblers; the
/// remaining fields are carried for clients that receive full records from
/// the session layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Platform user identifier.
    #[serde(rename = "userId")]
    pub id: i64,
    /// Given name.
    #[serde(rename = "userFirstName")]
    pub first_name: String,
    /// Family name.
    #[serde(rename = "userLastName")]
    pub last_name: String,
    /// Login name.
    #[serde(rename = "userName", skip_serializing_if = "String::is_empty")]
    pub user_name: String,
    /// Name shown next to posts.
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Profile picture URL.
    #[serde(rename = "userProfilePic", skip_serializing_if = "String::is_empty")]
    pub profile_pic: String,
    /// Rotation of the profile picture in degrees.
    #[serde(rename = "imageRotation")]
    pub image_rotation: i32,
    /// URL slug of the public profile.
    #[serde(rename = "userSlug", skip_serializing_if = "String::is_empty")]
    pub slug: String,
    /// Email address.
    pub email: String,
    /// Customer the user belongs to.
    #[serde(rename = "userCustomerId")]
    pub customer_id: i64,
    /// Human-readable role name.
    #[serde(rename = "roleName", skip_serializing_if = "String::is_empty")]
    pub role_name: String,
    /// Role key.
    pub role: String,
    /// Role identifier.
    #[serde(rename = "roleId")]
    pub role_id: i64,
    /// Date the user was invited.
    #[serde(rename = "inviteDate")]
    pub invite_date: String,
    /// Whether the invitation was accepted.
    pub accepted: bool,
    /// Preferred language code.
    pub language: String,
    /// Configured alias identifier.
    #[serde(rename = "aliasId")]
    pub alias_id: i64,
    /// Configured alias name.
    #[serde(rename = "aliasName")]
    pub alias_name: String,
    /// Configured alias picture.
    #[serde(rename = "aliasPic")]
    pub alias_pic: String,
    /// Rotation of the alias picture in degrees.
    #[serde(rename = "aliasRotation")]
    pub alias_rotation: i64,
    /// Address the request originated from.
    #[serde(rename = "userIP")]
    pub user_ip: String,
}

/// Display profile of an unauthenticated commenter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestProfile {
    /// Guest record identifier, omitted when unknown.
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    /// Self-supplied display name.
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Picture URL.
    #[serde(rename = "profilePicture")]
    pub profile_pic: String,
    /// Rotation of the picture in degrees.
    #[serde(rename = "imageRotation")]
    pub image_rotation: i32,
}

const fn is_zero(value: &i64) -> bool {
    *value == 0
}
