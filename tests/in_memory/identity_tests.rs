//! Comment author identities as served to clients.

use super::helpers::{ARTICLE, article, comment, service, store};
use broadcast_content::content::{
    adapters::{memory::InMemoryContentStore, models::CommentRow},
    services::FeedPolicy,
};
use rstest::rstest;
use serde_json::{Value, json};

async fn served_author(store: &InMemoryContentStore, row: CommentRow) -> Value {
    store.push_comment(&article(), row);
    let feed = service(store, FeedPolicy::ServeDegraded)
        .load_feed(ARTICLE)
        .await
        .expect("feed should load");
    let encoded = serde_json::to_value(&feed).expect("serialize");
    encoded["comments"][0]["commentUser"].clone()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registered_author(store: InMemoryContentStore) {
    let row = CommentRow {
        ifr_user_id: Some(21),
        user_name: Some("Jane Doe".to_owned()),
        email: Some("jane@example.com".to_owned()),
        ..comment(1, "c-1")
    };

    let author = served_author(&store, row).await;

    assert_eq!(author["userName"], json!("Jane Doe"));
    assert_eq!(author["ifrUserId"], json!(21));
    assert_eq!(author["isIfragasattUser"], json!(true));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn aliased_author(store: InMemoryContentStore) {
    let row = CommentRow {
        ifr_user_id: Some(42),
        email: Some("x@y.z".to_owned()),
        alias: Some("Moderator".to_owned()),
        alias_profile_pic: Some("p.png".to_owned()),
        alias_img_rotation: Some(0),
        ..comment(1, "c-1")
    };

    let author = served_author(&store, row).await;

    assert_eq!(author["userName"], json!("Moderator"));
    assert_eq!(author["email"], json!("x@y.z"));
    assert_eq!(author["profilePic"], json!("p.png"));
    assert_eq!(author["imgRotation"], json!(0));
    assert_eq!(author["isIfragasattUser"], json!(true));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn guest_author(store: InMemoryContentStore) {
    let row = CommentRow {
        guest_user_name: Some("Visitor".to_owned()),
        guest_email: Some("v@example.com".to_owned()),
        ..comment(1, "c-1")
    };

    let author = served_author(&store, row).await;

    assert_eq!(author["userName"], json!("Visitor"));
    assert_eq!(author["guestUserName"], json!("Visitor"));
    assert_eq!(author["guestEmail"], json!("v@example.com"));
    assert_eq!(author["isIfragasattUser"], json!(false));
    assert!(author.get("token").is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn anonymous_author(store: InMemoryContentStore) {
    let author = served_author(&store, comment(1, "c-1")).await;

    assert_eq!(author["userName"], json!(""));
    assert_eq!(author["email"], json!(""));
    assert_eq!(author["ifrUserId"], json!(0));
    assert_eq!(author["isIfragasattUser"], json!(false));
}
