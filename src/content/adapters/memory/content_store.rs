//! Seeded in-memory content store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

use crate::content::{
    adapters::{
        conversion::{
            assemble_rows, row_to_broadcast_info, row_to_comment, row_to_header_sort_order,
            row_to_info_text, row_to_sport_result,
        },
        models::{BroadcastRow, CommentRow, HeaderSortOrderRow, InfoTextRow, SportResultRow},
    },
    domain::{ArticleId, BroadcastInfo, Comment, HeaderSortOrder, InfoText, SportResult},
    ports::{
        Assembled, BroadcastContentRepository, ContentRepositoryError, ContentRepositoryResult,
    },
};

/// Status a comment row needs to be returned by the comment query.
const PUBLISHED: &str = "published";

/// Decoding failure planted in place of a row.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed row: {0}")]
pub struct MalformedRow(pub String);

/// Result set a planted malformed row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// Broadcast metadata lookup.
    Broadcast,
    /// Info text list.
    InfoText,
    /// Scoreboard history.
    SportResult,
    /// Header rank list.
    HeaderSortOrder,
    /// Published comment list.
    Comment,
}

type StoredRow<R> = Result<R, MalformedRow>;

/// Thread-safe in-memory content store.
///
/// Rows are returned in insertion order, which stands in for the storage
/// ordering of the `PostgreSQL` queries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentStore {
    state: Arc<RwLock<InMemoryContentState>>,
}

#[derive(Debug, Default)]
struct InMemoryContentState {
    articles: HashMap<ArticleId, ArticleRows>,
    unavailable: bool,
}

#[derive(Debug, Default, Clone)]
struct ArticleRows {
    broadcast: Option<StoredRow<BroadcastRow>>,
    info_texts: Vec<StoredRow<InfoTextRow>>,
    sport_results: Vec<StoredRow<SportResultRow>>,
    header_sort_order: Vec<StoredRow<HeaderSortOrderRow>>,
    comments: Vec<StoredRow<CommentRow>>,
}

impl InMemoryContentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the broadcast metadata row of an article.
    pub fn insert_broadcast(&self, article_id: &ArticleId, row: BroadcastRow) {
        self.seed(article_id, |rows| rows.broadcast = Some(Ok(row)));
    }

    /// Appends an info text row.
    pub fn push_info_text(&self, article_id: &ArticleId, row: InfoTextRow) {
        self.seed(article_id, |rows| rows.info_texts.push(Ok(row)));
    }

    /// Appends a scoreboard snapshot row.
    pub fn push_sport_result(&self, article_id: &ArticleId, row: SportResultRow) {
        self.seed(article_id, |rows| rows.sport_results.push(Ok(row)));
    }

    /// Appends a header rank row.
    pub fn push_header_sort_order(&self, article_id: &ArticleId, row: HeaderSortOrderRow) {
        self.seed(article_id, |rows| rows.header_sort_order.push(Ok(row)));
    }

    /// Appends a comment row. Rows whose status is not `published` are
    /// stored but never returned.
    pub fn push_comment(&self, article_id: &ArticleId, row: CommentRow) {
        self.seed(article_id, |rows| rows.comments.push(Ok(row)));
    }

    /// Plants a row that fails to decode at the current end of a result set.
    pub fn push_malformed(&self, article_id: &ArticleId, kind: RowKind, reason: impl Into<String>) {
        let malformed = MalformedRow(reason.into());
        self.seed(article_id, |rows| match kind {
            RowKind::Broadcast => rows.broadcast = Some(Err(malformed)),
            RowKind::InfoText => rows.info_texts.push(Err(malformed)),
            RowKind::SportResult => rows.sport_results.push(Err(malformed)),
            RowKind::HeaderSortOrder => rows.header_sort_order.push(Err(malformed)),
            RowKind::Comment => rows.comments.push(Err(malformed)),
        });
    }

    /// Makes every query fail until reset, as if storage were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .unavailable = unavailable;
    }

    fn seed(&self, article_id: &ArticleId, apply: impl FnOnce(&mut ArticleRows)) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        apply(state.articles.entry(article_id.clone()).or_default());
    }

    /// Snapshots the rows of an article, failing like an unreachable store.
    fn rows_for(&self, article_id: &ArticleId) -> ContentRepositoryResult<ArticleRows> {
        let state = self.state.read().map_err(|err| {
            ContentRepositoryError::query(std::io::Error::other(err.to_string()))
        })?;
        if state.unavailable {
            return Err(ContentRepositoryError::query(std::io::Error::other(
                "content store unavailable",
            )));
        }
        Ok(state.articles.get(article_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl BroadcastContentRepository for InMemoryContentStore {
    async fn broadcast_info(
        &self,
        article_id: &ArticleId,
    ) -> ContentRepositoryResult<BroadcastInfo> {
        match self.rows_for(article_id)?.broadcast {
            None => Ok(BroadcastInfo::default()),
            Some(Ok(row)) => Ok(row_to_broadcast_info(row)),
            Some(Err(malformed)) => Err(ContentRepositoryError::decode(0, malformed)),
        }
    }

    async fn info_texts(
        &self,
        article_id: &ArticleId,
    ) -> ContentRepositoryResult<Assembled<InfoText>> {
        let rows = self.rows_for(article_id)?.info_texts;
        Ok(assemble_rows(rows, row_to_info_text))
    }

    async fn sport_results(
        &self,
        article_id: &ArticleId,
    ) -> ContentRepositoryResult<Assembled<SportResult>> {
        let rows = self.rows_for(article_id)?.sport_results;
        Ok(assemble_rows(rows, row_to_sport_result))
    }

    async fn header_sort_order(
        &self,
        article_id: &ArticleId,
    ) -> ContentRepositoryResult<Assembled<HeaderSortOrder>> {
        let rows = self.rows_for(article_id)?.header_sort_order;
        Ok(assemble_rows(rows, row_to_header_sort_order))
    }

    async fn published_comments(
        &self,
        article_id: &ArticleId,
    ) -> ContentRepositoryResult<Assembled<Comment>> {
        let rows = self
            .rows_for(article_id)?
            .comments
            .into_iter()
            .filter(|stored| match stored {
                Ok(row) => row.status == PUBLISHED,
                Err(_) => true,
            });
        Ok(assemble_rows(rows, row_to_comment))
    }
}
