use crate::common::{get_request, json_request, photo_request, read_json, TestHelper};
use axum::http::StatusCode;
use chrono::{Datelike, TimeZone, Utc};
use folio_types::DashboardSummary;

#[tokio::test]
async fn test_dashboard_summary() {
    let helper = TestHelper::new().await.unwrap();

    let year = Utc::now().year();
    let taken = [
        ("a", Some("Kyoto"), Some(year)),
        ("b", Some("Kyoto"), Some(year)),
        ("c", Some("Osaka"), Some(year - 2)),
        ("d", Some("Nara"), Some(year - 10)),
        ("e", None, None),
    ];

    for (title, region, taken_year) in taken {
        let mut request = photo_request(title, region.map(|_| "Japan"), Some("JP"), region, None);
        request.date_time_original =
            taken_year.map(|y| Utc.with_ymd_and_hms(y, 6, 1, 9, 30, 0).unwrap());

        let response = helper
            .send_oneshot(json_request("POST", "/folio/photos", &request))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = helper
        .send_oneshot(get_request("/folio/dashboard/summary"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let summary: DashboardSummary = read_json(response).await;
    assert_eq!(summary.photo_count, 5);
    assert_eq!(summary.city_count, 3);

    let years = summary.yearly_stats.keys().copied().collect::<Vec<_>>();
    assert_eq!(years, (year - 4..=year).collect::<Vec<_>>());
    assert_eq!(summary.yearly_stats[&year], 2);
    assert_eq!(summary.yearly_stats[&(year - 1)], 0);
    assert_eq!(summary.yearly_stats[&(year - 2)], 1);

    assert_eq!(summary.top_cities.len(), 3);
    assert_eq!(summary.top_cities[0].city, "Kyoto");
    assert_eq!(summary.top_cities[0].photo_count, 2);
}
