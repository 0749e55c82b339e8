//! Service layer assembling the complete feed of a broadcast.
//!
//! Provides [`BroadcastFeedService`], which validates article identifiers,
//! exposes each content aggregate individually and joins all five into a
//! [`BroadcastFeed`]. Rows that fail to decode are either served as a
//! degraded feed or rejected, according to the configured [`FeedPolicy`].

use crate::content::{
    domain::{
        ArticleId, BroadcastInfo, Comment, ContentDomainError, HeaderSortOrder, InfoText,
        SportResult,
    },
    ports::{Assembled, BroadcastContentRepository, ContentRepositoryError},
};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Handling of rows that fail to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedPolicy {
    /// Serve the rows decoded before the failure and record the degradation.
    #[default]
    ServeDegraded,
    /// Fail the whole request.
    RejectDegraded,
}

/// Content aggregate of a broadcast feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Aggregate {
    /// Broadcast metadata.
    BroadcastInfo,
    /// Info texts.
    InfoTexts,
    /// Scoreboard history.
    SportResults,
    /// Header ranks.
    HeaderSortOrder,
    /// Published comments.
    Comments,
}

impl Aggregate {
    /// Returns the display name of the aggregate.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BroadcastInfo => "broadcast info",
            Self::InfoTexts => "info texts",
            Self::SportResults => "sport results",
            Self::HeaderSortOrder => "header sort order",
            Self::Comments => "comments",
        }
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of an aggregate served with truncated or zero-value data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Degradation {
    /// Affected aggregate.
    pub aggregate: Aggregate,
    /// Description of the decoding failure.
    pub reason: String,
}

/// All content of one broadcast, as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastFeed {
    /// Article the feed belongs to.
    pub article_id: String,
    /// Broadcast metadata; the zero value when the broadcast is unknown.
    pub info: BroadcastInfo,
    /// Info texts, oldest first.
    pub info_texts: Vec<InfoText>,
    /// Scoreboard history, oldest first; the last entry is current.
    pub sport_results: Vec<SportResult>,
    /// Header ranks.
    #[serde(rename = "headerSortorder")]
    pub header_sort_order: Vec<HeaderSortOrder>,
    /// Published comments as a flat, parent-tagged list.
    pub comments: Vec<Comment>,
    /// Aggregates served with degraded data.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub degraded: Vec<Degradation>,
}

impl BroadcastFeed {
    /// Returns `true` when every aggregate decoded completely.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.degraded.is_empty()
    }
}

/// Service-level errors for feed assembly.
#[derive(Debug, Error)]
pub enum FeedServiceError {
    /// The article identifier failed validation.
    #[error(transparent)]
    Domain(#[from] ContentDomainError),

    /// Storage could not run the query for an aggregate.
    #[error("failed to load {aggregate}: {source}")]
    Repository {
        /// Aggregate whose query failed.
        aggregate: Aggregate,
        /// Repository failure.
        source: ContentRepositoryError,
    },

    /// A row failed to decode and the policy rejects degraded feeds.
    #[error("{aggregate} could not be assembled completely: {source}")]
    Degraded {
        /// Aggregate whose row failed to decode.
        aggregate: Aggregate,
        /// Decoding failure.
        source: ContentRepositoryError,
    },
}

/// Result type for feed service operations.
pub type FeedServiceResult<T> = Result<T, FeedServiceError>;

/// Feed assembly orchestration service.
#[derive(Clone)]
pub struct BroadcastFeedService<R>
where
    R: BroadcastContentRepository,
{
    repository: Arc<R>,
    policy: FeedPolicy,
}

impl<R> BroadcastFeedService<R>
where
    R: BroadcastContentRepository,
{
    /// Creates a new feed service.
    #[must_use]
    pub const fn new(repository: Arc<R>, policy: FeedPolicy) -> Self {
        Self { repository, policy }
    }

    /// Returns the configured decode-failure policy.
    #[must_use]
    pub const fn policy(&self) -> FeedPolicy {
        self.policy
    }

    /// Loads the broadcast metadata.
    ///
    /// # Errors
    ///
    /// Returns [`FeedServiceError::Domain`] for an invalid article
    /// identifier and [`FeedServiceError::Repository`] when the lookup fails.
    pub async fn broadcast_info(&self, article_id: &str) -> FeedServiceResult<BroadcastInfo> {
        let article = ArticleId::new(article_id)?;
        self.repository
            .broadcast_info(&article)
            .await
            .map_err(|source| repository_error(Aggregate::BroadcastInfo, source))
    }

    /// Loads the info texts.
    ///
    /// # Errors
    ///
    /// Returns [`FeedServiceError::Domain`] for an invalid article
    /// identifier and [`FeedServiceError::Repository`] when the query fails.
    pub async fn info_texts(&self, article_id: &str) -> FeedServiceResult<Assembled<InfoText>> {
        let article = ArticleId::new(article_id)?;
        self.repository
            .info_texts(&article)
            .await
            .map_err(|source| repository_error(Aggregate::InfoTexts, source))
    }

    /// Loads the scoreboard history.
    ///
    /// # Errors
    ///
    /// Returns [`FeedServiceError::Domain`] for an invalid article
    /// identifier and [`FeedServiceError::Repository`] when the query fails.
    pub async fn sport_results(
        &self,
        article_id: &str,
    ) -> FeedServiceResult<Assembled<SportResult>> {
        let article = ArticleId::new(article_id)?;
        self.repository
            .sport_results(&article)
            .await
            .map_err(|source| repository_error(Aggregate::SportResults, source))
    }

    /// Loads the header ranks.
    ///
    /// # Errors
    ///
    /// Returns [`FeedServiceError::Domain`] for an invalid article
    /// identifier and [`FeedServiceError::Repository`] when the query fails.
    pub async fn header_sort_order(
        &self,
        article_id: &str,
    ) -> FeedServiceResult<Assembled<HeaderSortOrder>> {
        let article = ArticleId::new(article_id)?;
        self.repository
            .header_sort_order(&article)
            .await
            .map_err(|source| repository_error(Aggregate::HeaderSortOrder, source))
    }

    /// Loads the published comments.
    ///
    /// # Errors
    ///
    /// Returns [`FeedServiceError::Domain`] for an invalid article
    /// identifier and [`FeedServiceError::Repository`] when the query fails.
    pub async fn published_comments(
        &self,
        article_id: &str,
    ) -> FeedServiceResult<Assembled<Comment>> {
        let article = ArticleId::new(article_id)?;
        self.repository
            .published_comments(&article)
            .await
            .map_err(|source| repository_error(Aggregate::Comments, source))
    }

    /// Loads all five aggregates concurrently and joins them into a feed.
    ///
    /// # Errors
    ///
    /// Returns [`FeedServiceError::Domain`] for an invalid article
    /// identifier, [`FeedServiceError::Repository`] when any query fails, and
    /// [`FeedServiceError::Degraded`] when a row fails to decode under
    /// [`FeedPolicy::RejectDegraded`].
    pub async fn load_feed(&self, article_id: &str) -> FeedServiceResult<BroadcastFeed> {
        let article = ArticleId::new(article_id)?;
        let repository = &*self.repository;
        let (info_result, info_texts, sport_results, header_sort_order, comments) = tokio::join!(
            repository.broadcast_info(&article),
            repository.info_texts(&article),
            repository.sport_results(&article),
            repository.header_sort_order(&article),
            repository.published_comments(&article),
        );

        let mut degraded = Vec::new();
        let feed = BroadcastFeed {
            article_id: article.as_str().to_owned(),
            info: self.settle_info(&article, info_result, &mut degraded)?,
            info_texts: self.settle_list(
                &article,
                Aggregate::InfoTexts,
                info_texts,
                &mut degraded,
            )?,
            sport_results: self.settle_list(
                &article,
                Aggregate::SportResults,
                sport_results,
                &mut degraded,
            )?,
            header_sort_order: self.settle_list(
                &article,
                Aggregate::HeaderSortOrder,
                header_sort_order,
                &mut degraded,
            )?,
            comments: self.settle_list(&article, Aggregate::Comments, comments, &mut degraded)?,
            degraded,
        };

        info!(
            article_id = %article,
            info_texts = feed.info_texts.len(),
            sport_results = feed.sport_results.len(),
            comments = feed.comments.len(),
            degraded = feed.degraded.len(),
            "assembled broadcast feed"
        );
        Ok(feed)
    }

    fn settle_info(
        &self,
        article: &ArticleId,
        result: Result<BroadcastInfo, ContentRepositoryError>,
        degraded: &mut Vec<Degradation>,
    ) -> FeedServiceResult<BroadcastInfo> {
        match result {
            Ok(broadcast) => Ok(broadcast),
            Err(source) if source.is_decode() => {
                self.degrade(article, Aggregate::BroadcastInfo, source, degraded)?;
                Ok(BroadcastInfo::default())
            }
            Err(source) => Err(repository_error(Aggregate::BroadcastInfo, source)),
        }
    }

    fn settle_list<T>(
        &self,
        article: &ArticleId,
        aggregate: Aggregate,
        result: Result<Assembled<T>, ContentRepositoryError>,
        degraded: &mut Vec<Degradation>,
    ) -> FeedServiceResult<Vec<T>> {
        let (items, failure) = result
            .map_err(|source| repository_error(aggregate, source))?
            .into_parts();
        if let Some(source) = failure {
            self.degrade(article, aggregate, source, degraded)?;
        }
        Ok(items)
    }

    fn degrade(
        &self,
        article: &ArticleId,
        aggregate: Aggregate,
        source: ContentRepositoryError,
        degraded: &mut Vec<Degradation>,
    ) -> FeedServiceResult<()> {
        match self.policy {
            FeedPolicy::RejectDegraded => Err(FeedServiceError::Degraded { aggregate, source }),
            FeedPolicy::ServeDegraded => {
                warn!(
                    article_id = %article,
                    aggregate = %aggregate,
                    error = %source,
                    "serving degraded content"
                );
                degraded.push(Degradation {
                    aggregate,
                    reason: source.to_string(),
                });
                Ok(())
            }
        }
    }
}

fn repository_error(aggregate: Aggregate, source: ContentRepositoryError) -> FeedServiceError {
    FeedServiceError::Repository { aggregate, source }
}
