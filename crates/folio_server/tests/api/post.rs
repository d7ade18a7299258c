use crate::common::{
    get_request, json_request, post_request, raw_json_request, read_json, TestHelper,
};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use folio_types::{FolioServerError, PageRequest, PageResult, Post, Visibility};
use uuid::Uuid;

fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("DELETE")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_post_crud() {
    let helper = TestHelper::new().await.unwrap();

    // 1. Create
    let request = post_request("Autumn in Kyoto", Visibility::Private);
    let response = helper
        .send_oneshot(json_request("POST", "/folio/posts", &request))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let post: Post = read_json(response).await;
    assert_eq!(post.slug, "autumn-in-kyoto");
    assert_eq!(post.reading_time_minutes, 3);
    assert_eq!(post.tags, vec!["travel".to_string()]);

    // 2. Get
    let response = helper
        .send_oneshot(get_request(&format!("/folio/posts/{}", post.id)))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Post = read_json(response).await;
    assert_eq!(fetched, post);

    // 3. Update
    let mut update = post_request("Autumn in Kyoto, revisited", Visibility::Public);
    update.slug = Some("kyoto autumn".to_string());
    update.content = "short".to_string();
    let response = helper
        .send_oneshot(json_request(
            "PUT",
            &format!("/folio/posts/{}", post.id),
            &update,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Post = read_json(response).await;
    assert_eq!(updated.slug, "kyoto-autumn");
    assert_eq!(updated.visibility, Visibility::Public);
    assert_eq!(updated.reading_time_minutes, 1);

    // 4. Delete
    let response = helper
        .send_oneshot(delete_request(&format!("/folio/posts/{}", post.id)))
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = helper
        .send_oneshot(get_request(&format!("/folio/posts/{}", post.id)))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = helper
        .send_oneshot(delete_request(&format!("/folio/posts/{}", post.id)))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_slug_conflicts() {
    let helper = TestHelper::new().await.unwrap();

    let request = post_request("Same Title", Visibility::Public);
    let response = helper
        .send_oneshot(json_request("POST", "/folio/posts", &request))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = helper
        .send_oneshot(json_request("POST", "/folio/posts", &request))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = helper
        .send_oneshot(json_request(
            "PUT",
            &format!("/folio/posts/{}", Uuid::now_v7()),
            &request,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_post_is_rejected() {
    let helper = TestHelper::lazy().await;

    let request = post_request("   ", Visibility::Public);
    let response = helper
        .send_oneshot(json_request("POST", "/folio/posts", &request))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = post_request("paginated", Visibility::Public);
    let response = helper
        .send_oneshot(json_request("POST", "/folio/posts", &request))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dashboard_listing_includes_private_posts() {
    let helper = TestHelper::new().await.unwrap();

    for (title, visibility) in [
        ("Public one", Visibility::Public),
        ("Private one", Visibility::Private),
        ("Public two", Visibility::Public),
    ] {
        helper
            .send_oneshot(json_request(
                "POST",
                "/folio/posts",
                &post_request(title, visibility),
            ))
            .await;
    }

    let response = helper
        .send_oneshot(json_request(
            "POST",
            "/folio/posts/paginated",
            &PageRequest::new(),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let page: PageResult<Post> = read_json(response).await;
    assert_eq!(page.items.len(), 3);
    assert!(page.next_cursor.is_none());
}

#[tokio::test]
async fn test_malformed_post_input_is_json_bad_request() {
    let helper = TestHelper::lazy().await;

    let response = helper
        .send_oneshot(raw_json_request("POST", "/folio/posts", r#"{"title":5}"#))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: FolioServerError = read_json(response).await;
    assert!(body.error.starts_with("Invalid request:"));

    let request = post_request("Autumn in Kyoto", Visibility::Public);
    let response = helper
        .send_oneshot(json_request("PUT", "/folio/posts/not-a-uuid", &request))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: FolioServerError = read_json(response).await;
    assert!(body.error.starts_with("Invalid request:"));

    let response = helper.send_oneshot(get_request("/folio/posts/42")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = helper.send_oneshot(delete_request("/folio/posts/42")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
