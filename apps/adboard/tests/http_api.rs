//! REST surface tests: routing, status mapping, and the shared-store
//! behavior of the composed router.

use adboard::server::rest_router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_ads::{AdService, InMemoryAdRepository};
use domain_users::{InMemoryUserRepository, UserService};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use timefmt::DateTimeFormatter;
use tower::ServiceExt;

fn app() -> Router {
    rest_router(
        AdService::new(InMemoryAdRepository::new(), DateTimeFormatter::seconds()),
        UserService::new(InMemoryUserRepository::new()),
    )
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn register_user(app: &Router, nickname: &str, email: &str) -> i64 {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/v1/users",
            json!({"nickname": nickname, "email": email}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn openapi_document_is_exposed() {
    let app = app();
    let (status, body) = send(&app, get("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].is_object());
}

#[tokio::test]
async fn user_crud_round_trip() {
    let app = app();

    let id = register_user(&app, "alice", "a@x.com").await;
    assert_eq!(id, 0);

    let (status, body) = send(&app, get("/api/v1/users/0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nickname"], "alice");

    // Partial update: empty nickname keeps the stored value.
    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            "/api/v1/users/0",
            json!({"nickname": "", "email": "new@x.com"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nickname"], "alice");
    assert_eq!(body["email"], "new@x.com");

    let (status, _) = send(
        &app,
        Request::delete("/api/v1/users/0")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Deleting an absent user is an error.
    let (status, _) = send(
        &app,
        Request::delete("/api/v1/users/0")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_user_is_404() {
    let app = app();
    let (status, _) = send(&app, get("/api/v1/users/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn creating_an_ad_requires_an_existing_author() {
    let app = app();
    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/ads",
            json!({"title": "phone", "text": "buy new phone", "user_id": 0}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_title_is_400() {
    let app = app();
    register_user(&app, "alice", "a@x.com").await;

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/ads",
            json!({"title": "", "text": "buy new phone", "user_id": 0}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ad_lifecycle_scenario() {
    let app = app();
    register_user(&app, "alice", "a@x.com").await;
    register_user(&app, "bob", "b@x.com").await;

    // Create: unpublished draft with id 0.
    let (status, ad) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/ads",
            json!({"title": "phone", "text": "buy new phone", "user_id": 0}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ad["id"], 0);
    assert_eq!(ad["published"], false);
    assert_eq!(ad["create_date"], ad["update_date"]);

    // Drafts are hidden from the default listing.
    let (status, listed) = send(&app, get("/api/v1/ads")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 0);

    // The author publishes it.
    let (status, ad) = send(
        &app,
        json_request(
            "PUT",
            "/api/v1/ads/0/status",
            json!({"user_id": 0, "published": true}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ad["published"], true);

    // A stranger cannot unpublish it.
    let (status, _) = send(
        &app,
        json_request(
            "PUT",
            "/api/v1/ads/0/status",
            json!({"user_id": 1, "published": false}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // The published ad shows up in the default listing.
    let (status, listed) = send(&app, get("/api/v1/ads")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap().clone();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["published"], true);

    // Filter by author.
    let (status, listed) = send(&app, get("/api/v1/ads?user_id=0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, listed) = send(&app, get("/api/v1/ads?user_id=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 0);

    // Case-insensitive title filter.
    let (status, listed) = send(&app, get("/api/v1/ads?title=PHONE")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn updating_an_ad_enforces_ownership_and_validation() {
    let app = app();
    register_user(&app, "alice", "a@x.com").await;
    register_user(&app, "bob", "b@x.com").await;
    send(
        &app,
        json_request(
            "POST",
            "/api/v1/ads",
            json!({"title": "phone", "text": "buy new phone", "user_id": 0}),
        ),
    )
    .await;

    // Stranger: forbidden.
    let (status, _) = send(
        &app,
        json_request(
            "PUT",
            "/api/v1/ads/0",
            json!({"user_id": 1, "title": "tablet", "text": "buy new tablet"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Owner with an oversized text: rejected.
    let (status, _) = send(
        &app,
        json_request(
            "PUT",
            "/api/v1/ads/0",
            json!({"user_id": 0, "title": "tablet", "text": "x".repeat(501)}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Owner with valid fields: updated in place.
    let (status, ad) = send(
        &app,
        json_request(
            "PUT",
            "/api/v1/ads/0",
            json!({"user_id": 0, "title": "tablet", "text": "buy new tablet"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ad["title"], "tablet");
    assert_eq!(ad["author_id"], 0);

    // Missing ad: 404.
    let (status, _) = send(
        &app,
        json_request(
            "PUT",
            "/api/v1/ads/9",
            json!({"user_id": 0, "title": "tablet", "text": "buy new tablet"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_an_ad_enforces_ownership() {
    let app = app();
    register_user(&app, "alice", "a@x.com").await;
    send(
        &app,
        json_request(
            "POST",
            "/api/v1/ads",
            json!({"title": "phone", "text": "buy new phone", "user_id": 0}),
        ),
    )
    .await;

    let (status, _) = send(
        &app,
        Request::delete("/api/v1/ads/0?user_id=9")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        Request::delete("/api/v1/ads/0?user_id=0")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, get("/api/v1/ads/0")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn error_responses_carry_structured_codes() {
    let app = app();
    let (status, body) = send(&app, get("/api/v1/ads/5")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert!(body["code"].is_i64());
    assert!(body["message"].as_str().unwrap().contains('5'));
}
