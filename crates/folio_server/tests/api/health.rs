use crate::common::{get_request, read_json, TestHelper};
use axum::http::StatusCode;
use folio_types::Alive;

#[tokio::test]
async fn test_health_check() {
    let helper = TestHelper::lazy().await;

    let response = helper.send_anonymous(get_request("/folio/healthcheck")).await;

    //assert response
    assert_eq!(response.status(), StatusCode::OK);

    let v: Alive = read_json(response).await;
    assert_eq!(v.status, "Alive");
}
