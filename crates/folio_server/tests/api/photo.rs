use crate::common::{
    get_request, json_request, photo_request, raw_json_request, read_json, TestHelper,
};
use axum::http::StatusCode;
use folio_types::{CitySetWithPhotos, FolioServerError, MapPhoto, Photo, UpdatePhotoRequest};
use uuid::Uuid;

#[tokio::test]
async fn test_create_photo_files_city_set() {
    let helper = TestHelper::new().await.unwrap();

    let first = photo_request(
        "gion at dusk",
        Some("Japan"),
        Some("JP"),
        Some("Kyoto"),
        Some("Higashiyama"),
    );
    let response = helper
        .send_oneshot(json_request("POST", "/folio/photos", &first))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let first: Photo = read_json(response).await;
    assert!(first.city_set_id.is_some());

    let second = photo_request(
        "fushimi inari",
        Some("Japan"),
        Some("JP"),
        Some("Kyoto"),
        Some("Fushimi"),
    );
    let response = helper
        .send_oneshot(json_request("POST", "/folio/photos", &second))
        .await;
    let second: Photo = read_json(response).await;
    assert_eq!(second.city_set_id, first.city_set_id);

    let response = helper
        .send_anonymous(get_request("/folio/travel/city/kyoto"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let set: CitySetWithPhotos = read_json(response).await;
    assert_eq!(set.city_set.city, "Kyoto");
    assert_eq!(set.city_set.photo_count, 2);
    assert_eq!(set.cover_photo.map(|p| p.id), Some(first.id));
    assert_eq!(set.photos.len(), 2);
}

#[tokio::test]
async fn test_create_photo_without_location() {
    let helper = TestHelper::new().await.unwrap();

    let request = photo_request("studio", None, None, None, Some("Paris"));
    let response = helper
        .send_oneshot(json_request("POST", "/folio/photos", &request))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let photo: Photo = read_json(response).await;
    assert!(photo.city_set_id.is_none());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM folio.city_set")
        .fetch_one(&helper.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_create_photo_validation() {
    let helper = TestHelper::lazy().await;

    let mut request = photo_request("", Some("France"), Some("FR"), None, Some("Paris"));
    let response = helper
        .send_oneshot(json_request("POST", "/folio/photos", &request))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    request.title = "louvre".to_string();
    request.width = 0;
    let response = helper
        .send_oneshot(json_request("POST", "/folio/photos", &request))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_and_update_photo() {
    let helper = TestHelper::new().await.unwrap();

    let request = photo_request(
        "louvre",
        Some("France"),
        Some("FR"),
        Some("Île-de-France"),
        Some("Paris"),
    );
    let response = helper
        .send_oneshot(json_request("POST", "/folio/photos", &request))
        .await;
    let created: Photo = read_json(response).await;

    let response = helper
        .send_anonymous(get_request(&format!("/folio/photos/{}", created.id)))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Photo = read_json(response).await;
    assert_eq!(fetched, created);

    let response = helper
        .send_anonymous(get_request(&format!("/folio/photos/{}", Uuid::now_v7())))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let update = UpdatePhotoRequest {
        title: Some("louvre at night".to_string()),
        is_favorite: Some(true),
        ..Default::default()
    };
    let response = helper
        .send_oneshot(json_request(
            "PATCH",
            &format!("/folio/photos/{}", created.id),
            &update,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Photo = read_json(response).await;
    assert_eq!(updated.title, "louvre at night");
    assert!(updated.is_favorite);
    assert_eq!(updated.city, Some("Paris".to_string()));
    assert!(updated.updated_at >= created.updated_at);

    let response = helper
        .send_oneshot(json_request(
            "PATCH",
            &format!("/folio/photos/{}", Uuid::now_v7()),
            &update,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_and_map_photos() {
    let helper = TestHelper::new().await.unwrap();

    for title in ["one", "two", "three"] {
        let request = photo_request(title, Some("Japan"), Some("JP"), Some("Hokkaido"), None);
        helper
            .send_oneshot(json_request("POST", "/folio/photos", &request))
            .await;
    }

    let mut no_coordinates = photo_request("four", None, None, None, None);
    no_coordinates.latitude = None;
    no_coordinates.longitude = None;
    helper
        .send_oneshot(json_request("POST", "/folio/photos", &no_coordinates))
        .await;

    let response = helper.send_oneshot(get_request("/folio/photos")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let photos: Vec<Photo> = read_json(response).await;
    assert_eq!(photos.len(), 4);

    let response = helper.send_anonymous(get_request("/folio/map/photos")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let markers: Vec<MapPhoto> = read_json(response).await;
    assert_eq!(markers.len(), 3);
    assert!(markers.iter().all(|m| m.title != "four"));
}

#[tokio::test]
async fn test_malformed_photo_input_is_json_bad_request() {
    let helper = TestHelper::lazy().await;

    // missing required fields
    let response = helper
        .send_oneshot(raw_json_request("POST", "/folio/photos", r#"{"title":"x"}"#))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: FolioServerError = read_json(response).await;
    assert!(body.error.starts_with("Invalid request:"));

    let uri = format!("/folio/photos/{}", Uuid::now_v7());
    let response = helper
        .send_oneshot(raw_json_request("PATCH", &uri, r#"{"isFavorite":"yes"}"#))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: FolioServerError = read_json(response).await;
    assert!(body.error.starts_with("Invalid request:"));

    let response = helper
        .send_anonymous(get_request("/folio/photos/not-a-uuid"))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: FolioServerError = read_json(response).await;
    assert!(body.error.starts_with("Invalid request:"));
}

#[tokio::test]
async fn test_city_set_names_ignore_case() {
    let helper = TestHelper::new().await.unwrap();

    let first = photo_request("seine", Some("France"), Some("FR"), None, Some("Paris"));
    let second = photo_request("marais", Some("france"), Some("FR"), None, Some("PARIS"));

    let mut ids = Vec::new();
    for request in [&first, &second] {
        let response = helper
            .send_oneshot(json_request("POST", "/folio/photos", request))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let photo: Photo = read_json(response).await;
        ids.push(photo.city_set_id);
    }
    assert!(ids[0].is_some());
    assert_eq!(ids[0], ids[1]);

    let response = helper
        .send_anonymous(get_request("/folio/travel/city/paris"))
        .await;
    let set: CitySetWithPhotos = read_json(response).await;
    assert_eq!(set.city_set.city, "Paris");
    assert_eq!(set.city_set.photo_count, 2);
}
