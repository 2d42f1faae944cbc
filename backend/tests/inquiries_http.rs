//! Behavioural tests for the inquiry endpoints.

#[path = "support/app.rs"]
mod app_support;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use app_support::{cruzo_app, memory_state};
use chrono::{DateTime, Utc};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn inquiry() -> Value {
    json!({
        "name": "Rajesh Kumar",
        "phone": "+91 98400 00000",
        "serviceType": "premium",
        "location": "Sholinganallur",
    })
}

fn post_inquiry(body: &Value) -> TestRequest {
    TestRequest::post().uri("/api/inquiries").set_json(body)
}

#[rstest]
#[actix_web::test]
async fn omitted_email_is_stored_as_null(inquiry: Value) {
    let app = test::init_service(cruzo_app(memory_state())).await;

    let response = test::call_service(&app, post_inquiry(&inquiry).to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["inquiry"]["email"], Value::Null);
    assert_eq!(body["inquiry"]["message"], Value::Null);
    assert_eq!(body["inquiry"]["preferredDate"], Value::Null);
}

#[rstest]
#[actix_web::test]
async fn invalid_email_is_a_client_error(mut inquiry: Value) {
    inquiry["email"] = json!("not-an-email");
    let app = test::init_service(cruzo_app(memory_state())).await;

    let response = test::call_service(&app, post_inquiry(&inquiry).to_request()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;

    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Invalid inquiry data"));
    assert!(body["error"].as_str().is_some_and(|e| e.contains("email")));

    let listed: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/inquiries").to_request(),
    )
    .await;
    assert_eq!(listed["inquiries"], json!([]));
}

#[rstest]
#[actix_web::test]
async fn created_inquiries_get_increasing_ids_and_past_timestamps(inquiry: Value) {
    let app = test::init_service(cruzo_app(memory_state())).await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let body: Value =
            test::call_and_read_body_json(&app, post_inquiry(&inquiry).to_request()).await;
        let created_at: DateTime<Utc> = body["inquiry"]["createdAt"]
            .as_str()
            .expect("createdAt string")
            .parse()
            .expect("RFC 3339 timestamp");
        assert!(created_at <= Utc::now());
        ids.push(body["inquiry"]["id"].as_u64().expect("numeric id"));
    }

    assert_eq!(ids, vec![1, 2, 3]);
}

#[rstest]
#[case(1)]
#[case(5)]
#[actix_web::test]
async fn listing_returns_every_inquiry_in_creation_order(inquiry: Value, #[case] count: usize) {
    let app = test::init_service(cruzo_app(memory_state())).await;
    for n in 0..count {
        let mut body = inquiry.clone();
        body["name"] = json!(format!("Customer {n}"));
        let response = test::call_service(&app, post_inquiry(&body).to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let listed: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/inquiries").to_request(),
    )
    .await;
    assert_eq!(listed["success"], json!(true));
    let names: Vec<&str> = listed["inquiries"]
        .as_array()
        .expect("inquiries array")
        .iter()
        .filter_map(|i| i["name"].as_str())
        .collect();
    let expected: Vec<String> = (0..count).map(|n| format!("Customer {n}")).collect();
    assert_eq!(names, expected);
}

#[rstest]
#[actix_web::test]
async fn errors_carry_the_request_trace_id(mut inquiry: Value) {
    if let Some(map) = inquiry.as_object_mut() {
        map.remove("location");
    }
    let app = test::init_service(cruzo_app(memory_state())).await;

    let response = test::call_service(&app, post_inquiry(&inquiry).to_request()).await;
    let header = response
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = test::read_body_json(response).await;

    assert_eq!(body["traceId"].as_str(), Some(header.as_str()));
    assert_eq!(body["details"], json!({"field": "location", "code": "missing_field"}));
}
