//! Whole-feed assembly through the public service API.

use super::helpers::{ARTICLE, article, at, broadcast, comment, score, service, store};
use broadcast_content::content::{
    adapters::{
        memory::{InMemoryContentStore, RowKind},
        models::{BroadcastRow, HeaderSortOrderRow},
    },
    domain::{CommentThreads, current_result},
    services::{Aggregate, FeedPolicy, FeedServiceError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sport_history_is_served_oldest_first(store: InMemoryContentStore) {
    let article_id = article();
    store.insert_broadcast(&article_id, broadcast());
    store.push_sport_result(&article_id, score("s-1", 1, 0, 10));
    store.push_sport_result(&article_id, score("s-2", 2, 0, 40));

    let feed = service(&store, FeedPolicy::ServeDegraded)
        .load_feed(ARTICLE)
        .await
        .expect("feed should load");

    let history: Vec<(i32, i32)> = feed
        .sport_results
        .iter()
        .map(|result| (result.team_one_result, result.team_two_result))
        .collect();
    assert_eq!(history, vec![(1, 0), (2, 0)]);
    let current = current_result(&feed.sport_results).expect("current score");
    assert_eq!(current.created_at, "2024-01-01T18:40:00Z");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_broadcast_has_no_scheduled_times(store: InMemoryContentStore) {
    let article_id = article();
    store.insert_broadcast(
        &article_id,
        BroadcastRow {
            deleted_at: Some(at(12, 0)),
            ..broadcast()
        },
    );

    let info = service(&store, FeedPolicy::ServeDegraded)
        .broadcast_info(ARTICLE)
        .await
        .expect("lookup should succeed");

    assert_eq!(info.start_time, "");
    assert_eq!(info.end_time, "");
    assert_eq!(info.deleted_at_time, "2024-01-01T12:00:00Z");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn header_ranks_need_not_be_contiguous(store: InMemoryContentStore) {
    let article_id = article();
    for (guid, sortorder) in [("h-a", 1), ("h-b", 5), ("h-c", 40)] {
        store.push_header_sort_order(
            &article_id,
            HeaderSortOrderRow {
                guid: guid.to_owned(),
                sortorder,
            },
        );
    }

    let header = service(&store, FeedPolicy::RejectDegraded)
        .header_sort_order(ARTICLE)
        .await
        .expect("query should succeed");

    let indexes: Vec<i32> = header.items().iter().map(|entry| entry.index).collect();
    assert_eq!(indexes, vec![1, 5, 40]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn flat_comments_rebuild_into_threads(store: InMemoryContentStore) {
    let article_id = article();
    store.push_comment(&article_id, comment(1, "root"));
    let mut reply = comment(2, "reply");
    reply.parent_comment_guid = Some("root".to_owned());
    store.push_comment(&article_id, reply);

    let feed = service(&store, FeedPolicy::ServeDegraded)
        .load_feed(ARTICLE)
        .await
        .expect("feed should load");
    let threads = CommentThreads::new(&feed.comments);

    let roots: Vec<&str> = threads
        .roots()
        .iter()
        .map(|root| root.comment_guid.as_str())
        .collect();
    assert_eq!(roots, vec!["root"]);
    assert_eq!(threads.replies_to("root").len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_info_text_degrades_only_its_aggregate(store: InMemoryContentStore) {
    let article_id = article();
    store.insert_broadcast(&article_id, broadcast());
    store.push_malformed(&article_id, RowKind::InfoText, "text is NULL");
    store.push_comment(&article_id, comment(1, "c-1"));

    let feed = service(&store, FeedPolicy::ServeDegraded)
        .load_feed(ARTICLE)
        .await
        .expect("degraded feed should be served");

    assert!(feed.info_texts.is_empty());
    assert_eq!(feed.comments.len(), 1);
    let aggregates: Vec<Aggregate> = feed.degraded.iter().map(|entry| entry.aggregate).collect();
    assert_eq!(aggregates, vec![Aggregate::InfoTexts]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn strict_feed_rejects_malformed_rows(store: InMemoryContentStore) {
    let article_id = article();
    store.push_malformed(&article_id, RowKind::SportResult, "team_one_result overflow");

    let err = service(&store, FeedPolicy::RejectDegraded)
        .load_feed(ARTICLE)
        .await
        .expect_err("strict feed should fail");

    assert!(matches!(
        err,
        FeedServiceError::Degraded {
            aggregate: Aggregate::SportResults,
            ..
        }
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unavailable_storage_fails_the_feed(store: InMemoryContentStore) {
    store.set_unavailable(true);

    let err = service(&store, FeedPolicy::ServeDegraded)
        .load_feed(ARTICLE)
        .await
        .expect_err("feed should fail");

    assert!(matches!(err, FeedServiceError::Repository { .. }));
}
