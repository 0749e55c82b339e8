//! Application services for broadcast content.

mod feed;

pub use feed::{
    Aggregate, BroadcastFeed, BroadcastFeedService, Degradation, FeedPolicy, FeedServiceError,
    FeedServiceResult,
};
