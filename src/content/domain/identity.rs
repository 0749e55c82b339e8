//! Resolution of a comment author's displayed identity.
//!
//! A comment row joins three optional identity sources: the registered
//! platform user, the alias that user configured, and the guest name and
//! email supplied when the comment was written. Exactly one source supplies
//! the display identity, chosen by [`AuthorIdentity::classify`].

use super::{Coalesce, CommentUser};

/// Joined identity columns of a comment author, all nullable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityColumns {
    /// Platform user identifier.
    pub ifr_user_id: Option<i64>,
    /// Full name of the platform user.
    pub user_name: Option<String>,
    /// Email of the platform user.
    pub email: Option<String>,
    /// Picture of the platform user.
    pub profile_pic: Option<String>,
    /// Picture rotation of the platform user.
    pub img_rotation: Option<i32>,
    /// Alias name.
    pub alias: Option<String>,
    /// Alias picture.
    pub alias_profile_pic: Option<String>,
    /// Alias picture rotation.
    pub alias_img_rotation: Option<i32>,
    /// Guest name supplied with the comment.
    pub guest_user_name: Option<String>,
    /// Guest email supplied with the comment.
    pub guest_email: Option<String>,
}

/// Source that supplies a comment author's display identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorIdentity {
    /// Platform user, displayed with the account's own name, email, and
    /// picture. The name may be empty when the account has none on record.
    Registered,
    /// Platform user displayed through a configured alias.
    Aliased,
    /// Unauthenticated commenter.
    Guest,
    /// No identity source at all, e.g. a removed user.
    Anonymous,
}

impl AuthorIdentity {
    /// Picks the identity source, highest priority first: named platform
    /// user, alias, any other platform user, guest. Blank values count as
    /// absent.
    ///
    /// A platform id without a name or alias still outranks the guest
    /// columns, so a platform author is never shown under a stale guest name.
    #[must_use]
    pub fn classify(columns: &IdentityColumns) -> Self {
        if is_present(columns.user_name.as_deref()) {
            Self::Registered
        } else if is_present(columns.alias.as_deref()) {
            Self::Aliased
        } else if columns.ifr_user_id.is_some() {
            Self::Registered
        } else if is_present(columns.guest_user_name.as_deref())
            || is_present(columns.guest_email.as_deref())
        {
            Self::Guest
        } else {
            Self::Anonymous
        }
    }

    /// Returns `true` when the source is backed by a platform account.
    ///
    /// An alias always belongs to an underlying platform user.
    #[must_use]
    pub const fn is_platform_user(self) -> bool {
        matches!(self, Self::Registered | Self::Aliased)
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}

/// Builds the normalized display identity of a comment author.
///
/// Every column is coalesced. An author with no usable identity source
/// resolves to empty display fields rather than an error.
#[must_use]
pub fn resolve_comment_user(columns: IdentityColumns) -> CommentUser {
    let source = AuthorIdentity::classify(&columns);
    let IdentityColumns {
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
    } = columns;

    let alias_name = alias.coalesce();
    let alias_pic = alias_profile_pic.coalesce();
    let alias_rotation = alias_img_rotation.coalesce();
    let guest_name = guest_user_name.coalesce();
    let guest_mail = guest_email.coalesce();

    let (display_name, display_email, display_pic, display_rotation) = match source {
        AuthorIdentity::Registered => (
            user_name.coalesce(),
            email.coalesce(),
            profile_pic.coalesce(),
            img_rotation.coalesce(),
        ),
        AuthorIdentity::Aliased => (
            alias_name.clone(),
            email.coalesce(),
            alias_pic.clone(),
            alias_rotation,
        ),
        AuthorIdentity::Guest => (guest_name.clone(), guest_mail.clone(), String::new(), 0),
        AuthorIdentity::Anonymous => (String::new(), String::new(), String::new(), 0),
    };

    let is_platform_user = source.is_platform_user();
    CommentUser {
        ifr_user_id: if is_platform_user {
            ifr_user_id.coalesce()
        } else {
            0
        },
        user_name: display_name,
        email: display_email,
        profile_pic: display_pic,
        img_rotation: display_rotation,
        alias: alias_name,
        alias_profile_pic: alias_pic,
        alias_img_rotation: alias_rotation,
        token: String::new(),
        is_ifragasatt_user: is_platform_user,
        guest_user_name: guest_name,
        guest_email: guest_mail,
    }
}
