//! Consumer-side reconstruction of comment reply threads.

use super::Comment;
use std::collections::HashMap;

/// Index over a flat comment list keyed by comment identifier.
///
/// The assemblers never materialize a tree. Consumers that need one borrow
/// the flat list and walk it through this index; list order is kept within
/// every group.
#[derive(Debug, Clone)]
pub struct CommentThreads<'a> {
    comments: &'a [Comment],
    by_guid: HashMap<&'a str, &'a Comment>,
    replies: HashMap<&'a str, Vec<&'a Comment>>,
}

impl<'a> CommentThreads<'a> {
    /// Indexes the given comments.
    #[must_use]
    pub fn new(comments: &'a [Comment]) -> Self {
        let mut by_guid = HashMap::with_capacity(comments.len());
        let mut replies: HashMap<&'a str, Vec<&'a Comment>> = HashMap::new();
        for comment in comments {
            by_guid.insert(comment.comment_guid.as_str(), comment);
            if comment.is_reply() {
                replies
                    .entry(comment.parent_comment_guid.as_str())
                    .or_default()
                    .push(comment);
            }
        }
        Self {
            comments,
            by_guid,
            replies,
        }
    }

    /// Looks up a comment by identifier.
    #[must_use]
    pub fn get(&self, guid: &str) -> Option<&'a Comment> {
        self.by_guid.get(guid).copied()
    }

    /// Returns the direct replies to a comment.
    #[must_use]
    pub fn replies_to(&self, guid: &str) -> &[&'a Comment] {
        self.replies
            .get(guid)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns thread starters: top-level comments, and replies whose parent
    /// is not part of the list (e.g. unpublished or deleted).
    #[must_use]
    pub fn roots(&self) -> Vec<&'a Comment> {
        self.comments
            .iter()
            .filter(|comment| {
                !comment.is_reply()
                    || !self
                        .by_guid
                        .contains_key(comment.parent_comment_guid.as_str())
            })
            .collect()
    }
}
