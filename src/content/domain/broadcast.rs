//! Broadcast metadata record.

use super::Coalesce;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata describing one broadcast.
///
/// Exactly one record exists per article identifier. The `Default` value is
/// the zero-value record returned when the broadcast is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BroadcastInfo {
    /// Internal broadcast identifier.
    pub id: i64,
    /// Headline of the broadcast.
    pub subject: String,
    /// Introductory description.
    pub description: String,
    /// Effective start time, see [`effective_time`].
    pub start_time: String,
    /// Effective end time, see [`effective_time`].
    pub end_time: String,
    /// Short language code from the customer signup settings.
    pub language_code: String,
    /// Whether the header carousel is shown.
    pub enable_carousel: bool,
    /// Whether long posts collapse automatically.
    pub auto_collapse: bool,
    /// Default sort order of the feed (`asc` or `desc`).
    pub default_order: String,
    /// Deletion timestamp, empty while the broadcast is live.
    pub deleted_at_time: String,
    /// Whether the description is displayed.
    pub show_description: bool,
    /// Whether the sport scoreboard panel is displayed.
    pub has_sports_panel: bool,
    /// Whether the client scrolls to new posts automatically.
    pub autoscroll: bool,
    /// Whether comments are enabled.
    pub has_comments: bool,
    /// Whether registered platform users may comment.
    pub allow_ifr_comments: bool,
    /// Whether guests may comment.
    pub allow_anon_comments: bool,
    /// Whether guests must supply an email address.
    pub anon_comment_require_email: bool,
    /// Whether guests must accept the user terms.
    pub anon_comment_accept_terms: bool,
    /// Version of the user terms guests accept.
    pub user_terms_version: String,
    /// Owning customer.
    pub customer_id: i64,
    /// Whether the broadcast is archived automatically.
    pub auto_archive: bool,
    /// Short name of the owning customer.
    pub customer_shortname: String,
    /// Days after which the broadcast is archived.
    pub archive_after_days: i32,
    /// Embed script snippet.
    #[serde(rename = "embedJS")]
    pub embed_js: String,
    /// Embed markup snippet.
    #[serde(rename = "embedHTML")]
    pub embed_html: String,
    /// Whether the client opens in expanded mode.
    pub expanded_mode: bool,
    /// Number of posts shown before paging.
    pub posts_to_show: i32,
    /// Whether the broadcast is syndicated to partner sites.
    pub syndicate: bool,
}

impl BroadcastInfo {
    /// Returns `true` for the zero-value record of an unknown broadcast.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == Self::default()
    }
}

/// Resolves an effective schedule time.
///
/// The broadcast-specific override wins over everything, including a
/// cancelled or deleted broadcast. Without an override the scheduled time is
/// used unless the broadcast is deleted. Absent values coalesce to `""`.
#[must_use]
pub fn effective_time(
    override_at: Option<DateTime<Utc>>,
    scheduled_at: Option<DateTime<Utc>>,
    is_deleted: bool,
) -> String {
    override_at
        .or_else(|| scheduled_at.filter(|_| !is_deleted))
        .coalesce()
}
