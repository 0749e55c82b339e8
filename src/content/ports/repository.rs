//! Repository port for reading the content aggregates of a broadcast.

use crate::content::domain::{
    ArticleId, BroadcastInfo, Comment, HeaderSortOrder, InfoText, SportResult,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for content repository operations.
pub type ContentRepositoryResult<T> = Result<T, ContentRepositoryError>;

/// Read-only access to the persisted content of a broadcast.
///
/// Every method runs a single query scoped by the article identifier and
/// returns a fresh snapshot. Nothing is cached between calls and the methods
/// are independent of each other, so callers may run them concurrently.
/// Lists keep the order rows arrive in from storage.
///
/// Dropping a returned future does not necessarily stop the query behind it.
/// Adapters that run queries on blocking workers finish the statement in the
/// background and must bound how long it may run.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BroadcastContentRepository: Send + Sync {
    /// Loads the broadcast metadata.
    ///
    /// An unknown article yields the zero-value [`BroadcastInfo`], not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`ContentRepositoryError::Query`] when the lookup cannot run
    /// and [`ContentRepositoryError::Decode`] when the row is malformed.
    async fn broadcast_info(&self, article_id: &ArticleId)
    -> ContentRepositoryResult<BroadcastInfo>;

    /// Loads the info texts that are not soft-deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ContentRepositoryError::Query`] when the query cannot run.
    async fn info_texts(
        &self,
        article_id: &ArticleId,
    ) -> ContentRepositoryResult<Assembled<InfoText>>;

    /// Loads the scoreboard history that is not soft-deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ContentRepositoryError::Query`] when the query cannot run.
    async fn sport_results(
        &self,
        article_id: &ArticleId,
    ) -> ContentRepositoryResult<Assembled<SportResult>>;

    /// Loads the display ranks of header items.
    ///
    /// # Errors
    ///
    /// Returns [`ContentRepositoryError::Query`] when the query cannot run.
    async fn header_sort_order(
        &self,
        article_id: &ArticleId,
    ) -> ContentRepositoryResult<Assembled<HeaderSortOrder>>;

    /// Loads the published, non-deleted thread comments.
    ///
    /// # Errors
    ///
    /// Returns [`ContentRepositoryError::Query`] when the query cannot run.
    async fn published_comments(
        &self,
        article_id: &ArticleId,
    ) -> ContentRepositoryResult<Assembled<Comment>>;
}

/// Errors returned by content repository implementations.
///
/// An article without rows is not an error: lists come back empty and the
/// broadcast metadata comes back as its zero value.
#[derive(Debug, Clone, Error)]
pub enum ContentRepositoryError {
    /// The query could not be prepared or executed. No data is returned.
    #[error("query failed: {0}")]
    Query(Arc<dyn std::error::Error + Send + Sync>),

    /// A row did not match the expected shape.
    #[error("row {row} could not be decoded: {cause}")]
    Decode {
        /// Zero-based position of the malformed row in the result set.
        row: usize,
        /// Underlying decoding error.
        cause: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl ContentRepositoryError {
    /// Wraps a query preparation or execution error.
    pub fn query(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Query(Arc::new(err))
    }

    /// Wraps the decoding error of the row at `row`.
    pub fn decode(row: usize, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode {
            row,
            cause: Arc::new(err),
        }
    }

    /// Returns `true` for row decoding failures.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Rows assembled by a list query, possibly cut short by a decode failure.
///
/// A malformed row stops assembly; the rows decoded before it are kept so a
/// caller may serve a truncated but valid feed instead of none.
#[derive(Debug, Clone)]
pub struct Assembled<T> {
    items: Vec<T>,
    failure: Option<ContentRepositoryError>,
}

impl<T> Assembled<T> {
    /// Wraps a fully decoded result set.
    #[must_use]
    pub const fn complete(items: Vec<T>) -> Self {
        Self {
            items,
            failure: None,
        }
    }

    /// Wraps the rows decoded before `failure` stopped assembly.
    #[must_use]
    pub const fn partial(items: Vec<T>, failure: ContentRepositoryError) -> Self {
        Self {
            items,
            failure: Some(failure),
        }
    }

    /// Returns the assembled entities in storage order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the failure that truncated the list, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&ContentRepositoryError> {
        self.failure.as_ref()
    }

    /// Returns `true` when every row was decoded.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Splits into the assembled entities and the truncating failure.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Option<ContentRepositoryError>) {
        (self.items, self.failure)
    }

    /// Returns the entities, or the failure when the list is truncated.
    ///
    /// # Errors
    ///
    /// Returns the [`ContentRepositoryError::Decode`] that stopped assembly.
    pub fn into_result(self) -> ContentRepositoryResult<Vec<T>> {
        match self.failure {
            None => Ok(self.items),
            Some(failure) => Err(failure),
        }
    }
}

impl<T> Default for Assembled<T> {
    fn default() -> Self {
        Self::complete(Vec::new())
    }
}
