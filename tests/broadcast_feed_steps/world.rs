//! Shared world state for broadcast feed BDD scenarios.

use std::sync::Arc;

use broadcast_content::content::{
    adapters::memory::InMemoryContentStore,
    domain::ArticleId,
    services::{BroadcastFeed, BroadcastFeedService, FeedPolicy, FeedServiceError},
};
use rstest::fixture;

/// Scenario world for broadcast feed behaviour tests.
pub struct FeedWorld {
    pub store: InMemoryContentStore,
    pub policy: FeedPolicy,
    pub article_id: Option<ArticleId>,
    pub next_comment_id: i64,
    pub last_feed: Option<Result<BroadcastFeed, FeedServiceError>>,
}

impl FeedWorld {
    /// Creates a world with an empty store and the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: InMemoryContentStore::new(),
            policy: FeedPolicy::default(),
            article_id: None,
            next_comment_id: 1,
            last_feed: None,
        }
    }

    /// Returns the broadcast seeded by a given step.
    pub fn article(&self) -> Result<&ArticleId, eyre::Report> {
        self.article_id
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing broadcast in scenario world"))
    }

    /// Builds a feed service over the world's store.
    #[must_use]
    pub fn service(&self) -> BroadcastFeedService<InMemoryContentStore> {
        BroadcastFeedService::new(Arc::new(self.store.clone()), self.policy)
    }

    /// Returns the successfully loaded feed.
    pub fn feed(&self) -> Result<&BroadcastFeed, eyre::Report> {
        match self.last_feed.as_ref() {
            Some(Ok(feed)) => Ok(feed),
            Some(Err(err)) => Err(eyre::eyre!("feed failed to load: {err}")),
            None => Err(eyre::eyre!("feed was not loaded")),
        }
    }
}

impl Default for FeedWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> FeedWorld {
    FeedWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
