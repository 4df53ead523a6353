use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use seat_booking::{app, config::Config, config::LayoutTable, AppState};

async fn backend_with(occupied: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/occupied-seats"))
        .and(query_param("showtime_id", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(occupied))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auditorium-details/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "layout": { "sections": [10, 10], "premium_rows": 2, "total_rows": 8 },
            "premium_price": 12.5,
            "normal_price": 8.0
        })))
        .mount(&server)
        .await;
    server
}

fn router(server: &MockServer) -> Router {
    let state = AppState::with_layouts(Config::for_backend(&server.uri()), LayoutTable::builtin()).unwrap();
    app(state)
}

async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(b) => Body::from(b.to_string()),
            None => Body::empty(),
        })
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::String(String::from_utf8_lossy(&bytes).into()));
    (status, value)
}

#[tokio::test]
async fn health_is_ok() {
    let server = backend_with(json!([])).await;
    let (status, body) = send(router(&server), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("OK"));
}

#[tokio::test]
async fn seat_map_reflects_occupancy() {
    let server = backend_with(json!(["A1", "B2"])).await;
    let (status, body) = send(router(&server), "GET", "/api/auditoriums/1/seats?showtime_id=5", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["free_seats"], 158);
    assert_eq!(body["seat_map"]["aisles_after"], json!([10]));
    let a1 = &body["seat_map"]["rows"][0]["seats"][0];
    assert_eq!(a1["id"], "A1");
    assert_eq!(a1["occupied"], true);
    assert_eq!(a1["category"], "PREMIUM");
}

#[tokio::test]
async fn unknown_auditorium_uses_default_layout() {
    let server = backend_with(json!([])).await;
    let (status, body) = send(router(&server), "GET", "/api/auditoriums/77/seats?showtime_id=5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seat_map"]["layout"]["sections"], json!([10, 10]));
}

#[tokio::test]
async fn select_returns_block() {
    let server = backend_with(json!([])).await;
    let request = json!({ "showtime_id": 5, "auditorium_id": 1, "party_size": 3, "anchor_seat_id": "A9" });
    let (status, body) = send(router(&server), "PATCH", "/api/seats/select", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seats"], json!(["A7", "A8", "A9"]));
    assert_eq!(body["complete"], true);
}

#[tokio::test]
async fn select_conflicts_are_419() {
    let server = backend_with(json!(["A10", "C4"])).await;

    let occupied = json!({ "showtime_id": 5, "auditorium_id": 1, "party_size": 2, "anchor_seat_id": "A10" });
    let (status, body) = send(router(&server), "PATCH", "/api/seats/select", Some(occupied)).await;
    assert_eq!(status.as_u16(), 419);
    assert_eq!(body["error"], "seat A10 is already occupied");

    let too_big = json!({
        "showtime_id": 5, "auditorium_id": 1, "party_size": 5, "anchor_seat_id": "C2",
        "seats": ["H1", "H2", "H3", "H4", "H5"]
    });
    let (status, body) = send(router(&server), "PATCH", "/api/seats/select", Some(too_big)).await;
    assert_eq!(status.as_u16(), 419);
    assert!(body["error"].as_str().unwrap().contains("not enough adjacent seats"));
    assert_eq!(body["seats"], json!([]));
    assert_eq!(body["complete"], false);
}

#[tokio::test]
async fn occupied_click_keeps_prior_selection() {
    let server = backend_with(json!(["A10"])).await;
    let request = json!({
        "showtime_id": 5, "auditorium_id": 1, "party_size": 2, "anchor_seat_id": "A10",
        "seats": ["A2", "A3"]
    });
    let (status, body) = send(router(&server), "PATCH", "/api/seats/select", Some(request)).await;

    assert_eq!(status.as_u16(), 419);
    assert_eq!(body["seats"], json!(["A2", "A3"]));
    assert_eq!(body["complete"], true);
    assert_eq!(body["error"], "seat A10 is already occupied");
}

#[tokio::test]
async fn unknown_click_keeps_prior_selection() {
    let server = backend_with(json!([])).await;
    let request = json!({
        "showtime_id": 5, "auditorium_id": 1, "party_size": 3, "anchor_seat_id": "Q1",
        "seats": ["B4", "B5", "B6"]
    });
    let (status, body) = send(router(&server), "PATCH", "/api/seats/select", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["seats"], json!(["B4", "B5", "B6"]));
}

#[tokio::test]
async fn select_accepts_long_seat_ids_on_wide_layouts() {
    let server = backend_with(json!([])).await;
    let path = std::env::temp_dir().join(format!("layouts-{}.toml", uuid::Uuid::new_v4()));
    std::fs::write(
        &path,
        "[[auditoriums]]\nlayout = \"standard\"\nsections = [1000]\npremium_rows = 1\ntotal_rows = 2\n",
    )
    .unwrap();
    let layouts = LayoutTable::load(path.to_str().unwrap()).unwrap();
    std::fs::remove_file(&path).ok();
    let state = AppState::with_layouts(Config::for_backend(&server.uri()), layouts).unwrap();

    let request = json!({ "showtime_id": 5, "auditorium_id": 1, "party_size": 2, "anchor_seat_id": "A1000" });
    let (status, body) = send(app(state), "PATCH", "/api/seats/select", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seats"], json!(["A999", "A1000"]));
}

#[tokio::test]
async fn select_rejects_bad_party_size() {
    let server = backend_with(json!([])).await;
    let request = json!({ "showtime_id": 5, "auditorium_id": 1, "party_size": 9, "anchor_seat_id": "A1" });
    let (status, _) = send(router(&server), "PATCH", "/api/seats/select", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sub_cent_prices_round_only_in_the_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auditorium-details/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "premium_price": 12.5,
            "normal_price": 8.333
        })))
        .mount(&server)
        .await;

    let request = json!({ "auditorium_id": 3, "seats": ["B1", "B2", "B3"] });
    let (status, body) = send(router(&server), "POST", "/api/bookings/price", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "$8.33 + $8.33 + $8.33");
    assert_eq!(body["total"], "25.00");
    assert_eq!(body["total_cents"], 2500);
}

#[tokio::test]
async fn prices_selection() {
    let server = backend_with(json!([])).await;
    let request = json!({ "auditorium_id": 1, "seats": ["A1", "C3"] });
    let (status, body) = send(router(&server), "POST", "/api/bookings/price", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], "20.50");
    assert_eq!(body["total_cents"], 2050);
    assert_eq!(body["summary"], "$12.50 + $8.00");
    assert_eq!(body["seats"][0]["category"], "PREMIUM");
}

#[tokio::test]
async fn pricing_outage_is_503() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auditorium-details/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let request = json!({ "auditorium_id": 2, "seats": ["A1"] });
    let (status, _) = send(router(&server), "POST", "/api/bookings/price", Some(request)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn books_contiguous_block() {
    let server = backend_with(json!(["C6"])).await;
    Mock::given(method("POST"))
        .and(path("/book-tickets"))
        .and(body_json(json!({ "showtime_id": 5, "user_id": 42, "seats": ["C3", "C4", "C5"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&server)
        .await;

    let request = json!({ "showtime_id": 5, "auditorium_id": 1, "user_id": 42, "seats": ["C5", "C3", "C4"] });
    let (status, body) = send(router(&server), "POST", "/api/bookings", Some(request)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["seats"], json!(["C3", "C4", "C5"]));
    assert_eq!(body["price"]["total"], "24.00");
}

#[tokio::test]
async fn refuses_to_book_scattered_or_taken_seats() {
    let server = backend_with(json!(["C6"])).await;
    Mock::given(method("POST"))
        .and(path("/book-tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(0)
        .mount(&server)
        .await;

    for seats in [json!(["C5", "C6"]), json!(["C1", "C3"]), json!(["C10", "C11"])] {
        let request = json!({ "showtime_id": 5, "auditorium_id": 1, "user_id": 42, "seats": seats });
        let (status, _) = send(router(&server), "POST", "/api/bookings", Some(request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn backend_rejection_is_419() {
    let server = backend_with(json!([])).await;
    Mock::given(method("POST"))
        .and(path("/book-tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "failure" })))
        .mount(&server)
        .await;

    let request = json!({ "showtime_id": 5, "auditorium_id": 1, "user_id": 42, "seats": ["H1"] });
    let (status, _) = send(router(&server), "POST", "/api/bookings", Some(request)).await;
    assert_eq!(status.as_u16(), 419);
}
