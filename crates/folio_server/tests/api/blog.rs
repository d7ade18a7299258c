use crate::common::{get_request, json_request, post_request, read_json, TestHelper};
use axum::http::StatusCode;
use folio_types::{PageRequest, PageResult, Post, Visibility};

#[tokio::test]
async fn test_blog_serves_public_posts_only() {
    let helper = TestHelper::new().await.unwrap();

    let response = helper.send_anonymous(get_request("/folio/blog/latest")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let mut created = Vec::new();
    for (title, visibility) in [
        ("Hokkaido in winter", Visibility::Public),
        ("Draft notes", Visibility::Private),
        ("Taipei night markets", Visibility::Public),
        ("More drafts", Visibility::Private),
        ("Lisbon trams", Visibility::Public),
    ] {
        let response = helper
            .send_oneshot(json_request(
                "POST",
                "/folio/posts",
                &post_request(title, visibility),
            ))
            .await;
        let post: Post = read_json(response).await;
        created.push(post);
    }

    // walk the public listing two at a time
    let mut request = PageRequest::new().with_limit(2);
    let mut seen = Vec::new();
    loop {
        let response = helper
            .send_anonymous(json_request("POST", "/folio/blog/paginated", &request))
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let page: PageResult<Post> = read_json(response).await;
        assert!(page.items.iter().all(|p| p.visibility == Visibility::Public));
        seen.extend(page.items.into_iter().map(|p| p.slug));

        match page.next_cursor {
            Some(cursor) => request = request.next_page(&cursor),
            None => break,
        }
    }
    assert_eq!(
        seen,
        vec!["lisbon-trams", "taipei-night-markets", "hokkaido-in-winter"]
    );

    let response = helper.send_anonymous(get_request("/folio/blog/latest")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let latest: Post = read_json(response).await;
    assert_eq!(latest.slug, "lisbon-trams");

    let response = helper
        .send_anonymous(get_request("/folio/blog/taipei-night-markets"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = helper
        .send_anonymous(get_request("/folio/blog/draft-notes"))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = helper.send_anonymous(get_request("/folio/blog/nope")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
