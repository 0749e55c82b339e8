//! Diesel row models for content queries.
//!
//! Every model mirrors the select list of one query in
//! [`queries`](super::postgres::queries). Nullable columns stay `Option` here
//! and nowhere else: conversion coalesces them before entities are built.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Bool, Integer, Nullable, Text, Timestamptz};

/// Broadcast metadata joined with customer and language settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, QueryableByName)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BroadcastRow {
    /// Internal broadcast identifier.
    #[diesel(sql_type = BigInt)]
    pub id: i64,
    /// Headline.
    #[diesel(sql_type = Text)]
    pub subject: String,
    /// Introductory description.
    #[diesel(sql_type = Nullable<Text>)]
    pub description: Option<String>,
    /// Broadcast-specific start override.
    #[diesel(sql_type = Nullable<Timestamptz>)]
    pub start_time: Option<DateTime<Utc>>,
    /// Planned start.
    #[diesel(sql_type = Nullable<Timestamptz>)]
    pub scheduled_start: Option<DateTime<Utc>>,
    /// Broadcast-specific end override.
    #[diesel(sql_type = Nullable<Timestamptz>)]
    pub end_time: Option<DateTime<Utc>>,
    /// Planned end.
    #[diesel(sql_type = Nullable<Timestamptz>)]
    pub scheduled_end: Option<DateTime<Utc>>,
    /// Short language code.
    #[diesel(sql_type = Nullable<Text>)]
    pub language_code: Option<String>,
    /// Header carousel flag.
    #[diesel(sql_type = Bool)]
    pub enable_carousel: bool,
    /// Auto-collapse flag.
    #[diesel(sql_type = Bool)]
    pub auto_collapse: bool,
    /// Default feed order.
    #[diesel(sql_type = Nullable<Text>)]
    pub default_order: Option<String>,
    /// Soft-delete timestamp.
    #[diesel(sql_type = Nullable<Timestamptz>)]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Description visibility flag.
    #[diesel(sql_type = Bool)]
    pub show_description: bool,
    /// Scoreboard panel flag.
    #[diesel(sql_type = Bool)]
    pub has_sports_panel: bool,
    /// Autoscroll flag.
    #[diesel(sql_type = Bool)]
    pub autoscroll: bool,
    /// Comments flag.
    #[diesel(sql_type = Bool)]
    pub has_comments: bool,
    /// Platform-user comments flag.
    #[diesel(sql_type = Bool)]
    pub allow_ifr_comments: bool,
    /// Guest comments flag.
    #[diesel(sql_type = Bool)]
    pub allow_anon_comments: bool,
    /// Guest email requirement.
    #[diesel(sql_type = Bool)]
    pub anon_comment_require_email: bool,
    /// Guest terms requirement.
    #[diesel(sql_type = Bool)]
    pub anon_comment_accept_terms: bool,
    /// User terms version.
    #[diesel(sql_type = Nullable<Text>)]
    pub user_terms_version: Option<String>,
    /// Owning customer.
    #[diesel(sql_type = BigInt)]
    pub customer_id: i64,
    /// Auto-archive flag.
    #[diesel(sql_type = Bool)]
    pub auto_archive: bool,
    /// Customer short name.
    #[diesel(sql_type = Nullable<Text>)]
    pub customer_shortname: Option<String>,
    /// Archival policy in days.
    #[diesel(sql_type = Nullable<Integer>)]
    pub archive_after_days: Option<i32>,
    /// Embed script snippet.
    #[diesel(sql_type = Nullable<Text>)]
    pub embed_js: Option<String>,
    /// Embed markup snippet.
    #[diesel(sql_type = Nullable<Text>)]
    pub embed_html: Option<String>,
    /// Expanded mode flag.
    #[diesel(sql_type = Bool)]
    pub expanded_mode: bool,
    /// Posts shown before paging.
    #[diesel(sql_type = Nullable<Integer>)]
    pub posts_to_show: Option<i32>,
    /// Syndication flag.
    #[diesel(sql_type = Bool)]
    pub syndicate: bool,
}

/// Info text joined with its author.
#[derive(Debug, Clone, Default, PartialEq, Eq, QueryableByName)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InfoTextRow {
    /// Announcement body.
    #[diesel(sql_type = Text)]
    pub text: String,
    /// Creation timestamp.
    #[diesel(sql_type = Nullable<Timestamptz>)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last edit timestamp.
    #[diesel(sql_type = Nullable<Timestamptz>)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Client-visible identifier.
    #[diesel(sql_type = Text)]
    pub guid: String,
    /// Author identifier.
    #[diesel(sql_type = BigInt)]
    pub user_id: i64,
    /// Author given name.
    #[diesel(sql_type = Nullable<Text>)]
    pub first_name: Option<String>,
    /// Author family name.
    #[diesel(sql_type = Nullable<Text>)]
    pub last_name: Option<String>,
    /// Author picture.
    #[diesel(sql_type = Nullable<Text>)]
    pub profile_pic: Option<String>,
    /// Author profile slug.
    #[diesel(sql_type = Nullable<Text>)]
    pub slug: Option<String>,
}

/// Scoreboard snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, QueryableByName)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SportResultRow {
    /// First competitor name.
    #[diesel(sql_type = Nullable<Text>)]
    pub team_one_name: Option<String>,
    /// Second competitor name.
    #[diesel(sql_type = Nullable<Text>)]
    pub team_two_name: Option<String>,
    /// First competitor logo.
    #[diesel(sql_type = Nullable<Text>)]
    pub team_one_logo: Option<String>,
    /// Second competitor logo.
    #[diesel(sql_type = Nullable<Text>)]
    pub team_two_logo: Option<String>,
    /// First competitor score.
    #[diesel(sql_type = Nullable<Integer>)]
    pub team_one_result: Option<i32>,
    /// Second competitor score.
    #[diesel(sql_type = Nullable<Integer>)]
    pub team_two_result: Option<i32>,
    /// Owning article.
    #[diesel(sql_type = Text)]
    pub article_id: String,
    /// Client-visible identifier.
    #[diesel(sql_type = Text)]
    pub guid: String,
    /// Creation timestamp.
    #[diesel(sql_type = Nullable<Timestamptz>)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Header item rank.
#[derive(Debug, Clone, Default, PartialEq, Eq, QueryableByName)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HeaderSortOrderRow {
    /// Ranked item identifier.
    #[diesel(sql_type = Text)]
    pub guid: String,
    /// Display rank.
    #[diesel(sql_type = Integer)]
    pub sortorder: i32,
}

/// Published comment joined with report membership and the three author
/// identity sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, QueryableByName)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommentRow {
    /// Internal comment identifier.
    #[diesel(sql_type = BigInt)]
    pub id: i64,
    /// Owning article.
    #[diesel(sql_type = Text)]
    pub article_id: String,
    /// Client-visible identifier.
    #[diesel(sql_type = Text)]
    pub comment_guid: String,
    /// Grouping report, absent for ungrouped comments.
    #[diesel(sql_type = Nullable<Text>)]
    pub report_guid: Option<String>,
    /// Internal broadcast identifier.
    #[diesel(sql_type = BigInt)]
    pub broadcast_id: i64,
    /// Comment body.
    #[diesel(sql_type = Text)]
    pub text: String,
    /// Moderation status.
    #[diesel(sql_type = Text)]
    pub status: String,
    /// Parent comment, absent for top-level comments.
    #[diesel(sql_type = Nullable<Text>)]
    pub parent_comment_guid: Option<String>,
    /// Pinned flag.
    #[diesel(sql_type = Bool)]
    pub is_pinned: bool,
    /// Creation timestamp.
    #[diesel(sql_type = Nullable<Timestamptz>)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last edit timestamp.
    #[diesel(sql_type = Nullable<Timestamptz>)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Time the author wrote the comment.
    #[diesel(sql_type = Nullable<Timestamptz>)]
    pub written_at: Option<DateTime<Utc>>,
    /// Publishing moderator.
    #[diesel(sql_type = Nullable<BigInt>)]
    pub published_by_user_id: Option<i64>,
    /// Platform user identifier.
    #[diesel(sql_type = Nullable<BigInt>)]
    pub ifr_user_id: Option<i64>,
    /// Platform user full name.
    #[diesel(sql_type = Nullable<Text>)]
    pub user_name: Option<String>,
    /// Platform user email.
    #[diesel(sql_type = Nullable<Text>)]
    pub email: Option<String>,
    /// Platform user picture.
    #[diesel(sql_type = Nullable<Text>)]
    pub profile_pic: Option<String>,
    /// Platform user picture rotation.
    #[diesel(sql_type = Nullable<Integer>)]
    pub img_rotation: Option<i32>,
    /// Alias name.
    #[diesel(sql_type = Nullable<Text>)]
    pub alias: Option<String>,
    /// Alias picture.
    #[diesel(sql_type = Nullable<Text>)]
    pub alias_profile_pic: Option<String>,
    /// Alias picture rotation.
    #[diesel(sql_type = Nullable<Integer>)]
    pub alias_img_rotation: Option<i32>,
    /// Guest name.
    #[diesel(sql_type = Nullable<Text>)]
    pub guest_user_name: Option<String>,
    /// Guest email.
    #[diesel(sql_type = Nullable<Text>)]
    pub guest_email: Option<String>,
}
