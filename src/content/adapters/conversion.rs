//! Conversion of content rows into domain entities.
//!
//! Each `row_to_*` function coalesces the nullable columns of one row model
//! and stamps the entity's [`MessageType`]. [`assemble_rows`] drives a row
//! cursor through one of them and implements the partial-result policy
//! shared by every list query.

use super::models::{BroadcastRow, CommentRow, HeaderSortOrderRow, InfoTextRow, SportResultRow};
use crate::content::{
    domain::{
        BroadcastInfo, Coalesce, Comment, HeaderSortOrder, IdentityColumns, InfoText,
        MessageType, SportResult, User, effective_time, resolve_comment_user,
    },
    ports::{Assembled, ContentRepositoryError},
};

/// Drains a row cursor into an ordered entity list.
///
/// Rows are converted in arrival order. The first row that fails to decode
/// stops assembly: the entities built so far are returned together with a
/// [`ContentRepositoryError::Decode`] naming the row position, and the rest
/// of the cursor is dropped unread.
pub fn assemble_rows<R, T, E, I, F>(rows: I, mut convert: F) -> Assembled<T>
where
    I: IntoIterator<Item = Result<R, E>>,
    E: std::error::Error + Send + Sync + 'static,
    F: FnMut(R) -> T,
{
    let mut items = Vec::new();
    for (position, decoded) in rows.into_iter().enumerate() {
        match decoded {
            Ok(row) => items.push(convert(row)),
            Err(err) => {
                return Assembled::partial(items, ContentRepositoryError::decode(position, err));
            }
        }
    }
    Assembled::complete(items)
}

/// Converts a broadcast row, resolving the effective schedule.
#[must_use]
pub fn row_to_broadcast_info(row: BroadcastRow) -> BroadcastInfo {
    let is_deleted = row.deleted_at.is_some();
    BroadcastInfo {
        id: row.id,
        subject: row.subject,
        description: row.description.coalesce(),
        start_time: effective_time(row.start_time, row.scheduled_start, is_deleted),
        end_time: effective_time(row.end_time, row.scheduled_end, is_deleted),
        language_code: row.language_code.coalesce(),
        enable_carousel: row.enable_carousel,
        auto_collapse: row.auto_collapse,
        default_order: row.default_order.coalesce(),
        deleted_at_time: row.deleted_at.coalesce(),
        show_description: row.show_description,
        has_sports_panel: row.has_sports_panel,
        autoscroll: row.autoscroll,
        has_comments: row.has_comments,
        allow_ifr_comments: row.allow_ifr_comments,
        allow_anon_comments: row.allow_anon_comments,
        anon_comment_require_email: row.anon_comment_require_email,
        anon_comment_accept_terms: row.anon_comment_accept_terms,
        user_terms_version: row.user_terms_version.coalesce(),
        customer_id: row.customer_id,
        auto_archive: row.auto_archive,
        customer_shortname: row.customer_shortname.coalesce(),
        archive_after_days: row.archive_after_days.coalesce(),
        embed_js: row.embed_js.coalesce(),
        embed_html: row.embed_html.coalesce(),
        expanded_mode: row.expanded_mode,
        posts_to_show: row.posts_to_show.coalesce(),
        syndicate: row.syndicate,
    }
}

/// Converts an info text row and its author.
#[must_use]
pub fn row_to_info_text(row: InfoTextRow) -> InfoText {
    let InfoTextRow {
        text,
        created_at,
        updated_at,
        guid,
        user_id,
        first_name,
        last_name,
        profile_pic,
        slug,
    } = row;

    let user = User {
        id: user_id,
        first_name: first_name.coalesce(),
        last_name: last_name.coalesce(),
        profile_pic: profile_pic.coalesce(),
        slug: slug.coalesce(),
        ..User::default()
    };

    InfoText {
        text,
        guid,
        user,
        message_type: MessageType::Info,
        created_at: created_at.coalesce(),
        updated_at: updated_at.coalesce(),
    }
}

/// Converts a scoreboard snapshot row.
#[must_use]
pub fn row_to_sport_result(row: SportResultRow) -> SportResult {
    SportResult {
        team_one_name: row.team_one_name.coalesce(),
        team_two_name: row.team_two_name.coalesce(),
        team_one_logo: row.team_one_logo.coalesce(),
        team_two_logo: row.team_two_logo.coalesce(),
        team_one_result: row.team_one_result.coalesce(),
        team_two_result: row.team_two_result.coalesce(),
        article_id: row.article_id,
        guid: row.guid,
        created_at: row.created_at.coalesce(),
        message_type: MessageType::SportResult,
    }
}

/// Converts a header rank row.
#[must_use]
pub fn row_to_header_sort_order(row: HeaderSortOrderRow) -> HeaderSortOrder {
    HeaderSortOrder {
        guid: row.guid,
        index: row.sortorder,
        message_type: MessageType::HeaderSortOrder,
    }
}

/// Converts a comment row, resolving the author identity.
#[must_use]
pub fn row_to_comment(row: CommentRow) -> Comment {
    let CommentRow {
        id,
        article_id,
        comment_guid,
        report_guid,
        broadcast_id,
        text,
        status,
        parent_comment_guid,
        is_pinned,
        created_at,
        updated_at,
        written_at,
        published_by_user_id,
        ifr_user_id,
        user_name,
        email,
        profile_pic,
        img_rotation,
        alias,
        alias_profile_pic,
        alias_img_rotation,
        guest_user_name,
        guest_email,
    } = row;

    let user = resolve_comment_user(IdentityColumns {
        ifr_user_id,
        user_name,
        email,
        profile_pic,
        img_rotation,
        alias,
        alias_profile_pic,
        alias_img_rotation,
        guest_user_name,
        guest_email,
    });

    Comment {
        id,
        article_id,
        broadcast_id,
        comment_guid,
        report_guid: report_guid.coalesce(),
        parent_comment_guid: parent_comment_guid.coalesce(),
        status,
        is_pinned,
        text,
        user,
        written_at: written_at.coalesce(),
        updated_at: updated_at.coalesce(),
        created_at: created_at.coalesce(),
        deleted_at: String::new(),
        message_type: MessageType::ThreadComment,
        published_by_user_id: published_by_user_id.coalesce(),
    }
}
