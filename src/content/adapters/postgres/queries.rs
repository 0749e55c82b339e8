//! SQL text of the content queries.
//!
//! Column aliases match the field names of the row models in
//! [`models`](crate::content::adapters::models). Every query takes the
//! article identifier as `$1`. List queries order rows in storage; the
//! assemblers never re-sort.

/// Single-row broadcast metadata lookup.
pub const BROADCAST_INFO: &str = concat!(
    "SELECT b.id, b.subject, b.description, b.start_time, b.scheduled_start, ",
    "b.end_time, b.scheduled_end, l.short_name AS language_code, b.enable_carousel, ",
    "b.auto_collapse, b.default_order, b.deleted_at, b.show_description, ",
    "b.has_sports_panel, b.autoscroll, b.has_comments, b.allow_ifr_comments, ",
    "b.allow_anon_comments, css.anon_comment_require_email, ",
    "css.anon_comment_accept_terms, css.user_terms_version, b.customer_id, ",
    "b.auto_archive, c.short_name AS customer_shortname, cs.archive_after_days, ",
    "b.embed_js, b.embed_html, b.expanded_mode, b.posts_to_show, b.syndicate ",
    "FROM broadcasts b ",
    "JOIN customer_signup_settings css ON css.customer_id = b.customer_id ",
    "JOIN languages l ON l.id = css.language_id ",
    "JOIN customers c ON c.id = b.customer_id ",
    "JOIN customer_settings cs ON cs.customer_id = b.customer_id ",
    "WHERE b.article_id = $1 ",
    "LIMIT 1",
);

/// Info texts with their authors, oldest first.
pub const INFO_TEXTS: &str = concat!(
    "SELECT i.text, i.created_at, i.updated_at, i.guid, i.user_id, u.first_name, ",
    "u.last_name, u.profile_picture AS profile_pic, u.slug ",
    "FROM broadcasts b ",
    "JOIN infotexts i ON i.broadcast_id = b.id ",
    "JOIN users u ON u.id = i.user_id ",
    "WHERE b.article_id = $1 ",
    "AND i.deleted_at IS NULL ",
    "ORDER BY i.created_at, i.id",
);

/// Scoreboard history, oldest first.
pub const SPORT_RESULTS: &str = concat!(
    "SELECT team_one_name, team_two_name, team_one_logo, team_two_logo, ",
    "team_one_result, team_two_result, article_id, guid, created_at ",
    "FROM sport_results ",
    "WHERE article_id = $1 ",
    "AND deleted_at IS NULL ",
    "ORDER BY created_at, id",
);

/// Header item ranks, lowest rank first.
pub const HEADER_SORT_ORDER: &str = concat!(
    "SELECT hso.guid, hso.sortorder ",
    "FROM header_sortorder hso ",
    "JOIN broadcasts b ON b.id = hso.broadcast_id ",
    "WHERE b.article_id = $1 ",
    "ORDER BY hso.sortorder, hso.guid",
);

/// Published thread comments with report membership and all three author
/// identity sources, oldest first.
///
/// `user_name` joins whichever of the platform user's names are set, and is
/// empty when neither is.
pub const PUBLISHED_COMMENTS: &str = concat!(
    "SELECT c.id, b.article_id, c.comment_guid, r.guid AS report_guid, ",
    "c.broadcast_id, c.text, c.status, c.parent_comment_guid, c.is_pinned, ",
    "c.created_at, c.updated_at, c.written_at, c.published_by_user_id, ",
    "u.id AS ifr_user_id, concat_ws(' ', u.first_name, u.last_name) AS user_name, u.email, ",
    "u.profile_picture AS profile_pic, u.image_rotation AS img_rotation, ",
    "a.name AS alias, a.profile_picture AS alias_profile_pic, ",
    "a.image_rotation AS alias_img_rotation, ",
    "cu.user_name AS guest_user_name, cu.email AS guest_email ",
    "FROM comments c ",
    "JOIN broadcasts b ON b.id = c.broadcast_id ",
    "LEFT JOIN comment_users cu ON cu.id = c.comment_user_id ",
    "LEFT JOIN users u ON u.id = cu.ifr_user_id ",
    "LEFT JOIN aliases a ON a.id = u.alias_id ",
    "LEFT JOIN reports_comments rc ON rc.comment_id = c.id ",
    "LEFT JOIN reports r ON r.id = rc.report_id ",
    "WHERE b.article_id = $1 ",
    "AND c.status = 'published' ",
    "AND c.deleted_at IS NULL ",
    "ORDER BY c.created_at, c.id",
);
