//! Domain model for broadcast content assembly.
//!
//! Entities are immutable snapshots built fresh on every read. Nullable
//! storage columns never cross into this module: they are coalesced at the
//! adapter boundary through [`Coalesce`], and comment authors are normalized
//! through [`resolve_comment_user`].

mod broadcast;
mod coalesce;
mod comment;
mod error;
mod header;
mod identity;
mod ids;
mod info_text;
mod message_type;
mod sport_result;
mod thread;
mod user;

pub use broadcast::{BroadcastInfo, effective_time};
pub use coalesce::{Coalesce, format_timestamp};
pub use comment::{Comment, CommentUser};
pub use error::{ContentDomainError, ParseMessageTypeError};
pub use header::HeaderSortOrder;
pub use identity::{AuthorIdentity, IdentityColumns, resolve_comment_user};
pub use ids::ArticleId;
pub use info_text::InfoText;
pub use message_type::MessageType;
pub use sport_result::{SportExternal, SportResult, current_result};
pub use thread::CommentThreads;
pub use user::{GuestProfile, User};
