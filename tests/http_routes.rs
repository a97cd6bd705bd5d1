//! Router tests driving the full page surface through `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use disaster_desk::{
    app::create_router,
    app_state::AppState,
    config::Config,
    db::{JsonFileStore, MemoryStore, Report, ReportStore},
    modules::reports::ReportService,
};
use std::sync::Arc;
use tempfile::tempdir;
use tower::ServiceExt;

fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "SERVER_HOST" => Some("127.0.0.1".to_string()),
        "SERVER_PORT" => Some("0".to_string()),
        _ => None,
    })
    .unwrap()
}

fn router_with(store: Arc<dyn ReportStore>) -> Router {
    let reports = Arc::new(ReportService::new(store));
    create_router(AppState::new(reports, test_config()))
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/report")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn location(response: &Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

/// The `name=value` pair of the first `Set-Cookie` header.
fn flash_cookie(response: &Response) -> String {
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

const VALID_FORM: &str = "reporter_name=Anil&reporter_phone=%2B91-98765-43210&type=Flood\
&location=Guwahati&severity=4&affected_estimate=250&notes=Water+rising";

#[tokio::test]
async fn empty_listing_invites_first_report() {
    let app = router_with(Arc::new(MemoryStore::new()));

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Saved Reports"));
    assert!(html.contains("No reports yet."));
}

#[tokio::test]
async fn form_page_renders() {
    let app = router_with(Arc::new(MemoryStore::new()));

    let response = app.oneshot(get("/report")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"name="reporter_phone""#));
    assert!(html.contains("<option>Tsunami</option>"));
}

#[tokio::test]
async fn valid_submission_redirects_to_listing_with_acknowledgment() {
    let store = Arc::new(MemoryStore::new());
    let app = router_with(store.clone());

    let response = app.clone().oneshot(post_form(VALID_FORM)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    let cookie = flash_cookie(&response);

    let stored = store.load().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, 1);
    assert_eq!(stored[0].kind.as_deref(), Some("Flood"));
    assert_eq!(stored[0].reporter_phone.as_deref(), Some("+91-98765-43210"));
    assert_eq!(stored[0].notes.as_deref(), Some("Water rising"));

    let listing = app
        .clone()
        .oneshot(get_with_cookie("/", &cookie))
        .await
        .unwrap();
    let html = body_text(listing).await;
    assert!(html.contains("Report submitted successfully!"));
    assert!(html.contains("<td>Guwahati</td>"));
    assert!(html.contains("<td>Anil</td>"));

    // The message is one-shot: without the cookie it is gone.
    let html = body_text(app.oneshot(get("/")).await.unwrap()).await;
    assert!(!html.contains("Report submitted successfully!"));
}

#[tokio::test]
async fn invalid_phone_redirects_back_to_form_without_writing() {
    let store = Arc::new(MemoryStore::new());
    let app = router_with(store.clone());
    app.clone().oneshot(post_form(VALID_FORM)).await.unwrap();

    let response = app
        .clone()
        .oneshot(post_form("reporter_phone=x&type=Fire&location=Pune&severity=3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/report");
    let cookie = flash_cookie(&response);

    let ids: Vec<u64> = store.load().await.unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1]);

    let html = body_text(
        app.oneshot(get_with_cookie("/report", &cookie))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("Invalid phone format."));
}

#[tokio::test]
async fn blank_reporter_fields_show_not_available() {
    let store = Arc::new(MemoryStore::new());
    let app = router_with(store.clone());

    app.clone()
        .oneshot(post_form(
            "reporter_name=+++&reporter_phone=&type=Storm&location=Chennai&severity=2",
        ))
        .await
        .unwrap();

    let stored = store.load().await.unwrap();
    assert_eq!(stored[0].reporter_name, None);
    assert_eq!(stored[0].reporter_phone, None);
    assert_eq!(stored[0].affected_estimate, None);

    let html = body_text(app.oneshot(get("/")).await.unwrap()).await;
    assert_eq!(html.matches("<td>N/A</td>").count(), 2);
}

#[tokio::test]
async fn empty_location_is_accepted_as_submitted() {
    let store = Arc::new(MemoryStore::new());
    let app = router_with(store.clone());

    let response = app
        .oneshot(post_form("type=Other&location=&severity=9"))
        .await
        .unwrap();
    assert_eq!(location(&response), "/");

    let stored = store.load().await.unwrap();
    assert_eq!(stored[0].location.as_deref(), Some(""));
    assert_eq!(stored[0].severity.as_deref(), Some("9"));
}

#[tokio::test]
async fn repeated_form_keys_keep_the_first_value() {
    let store = Arc::new(MemoryStore::new());
    let app = router_with(store.clone());

    let response = app
        .oneshot(post_form("location=A&location=B&type=Fire&severity=3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let stored = store.load().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].location.as_deref(), Some("A"));
}

#[tokio::test]
async fn body_without_form_content_type_is_an_empty_submission() {
    let store = Arc::new(MemoryStore::new());
    let app = router_with(store.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/report")
        .body(Body::from("location=Ignored&type=Fire"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let stored = store.load().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, 1);
    assert_eq!(stored[0].kind, None);
    assert_eq!(stored[0].location, None);
    assert_eq!(stored[0].reporter_phone, None);
}

#[tokio::test]
async fn submissions_persist_to_json_file_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("disaster_reports.json");
    let app = router_with(Arc::new(JsonFileStore::new(&path)));

    for place in ["Shimla", "Manali", "Kullu"] {
        let body = format!("type=Landslide&location={}&severity=3", place);
        let response = app.clone().oneshot(post_form(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let document = std::fs::read_to_string(&path).unwrap();
    let reports: Vec<Report> = serde_json::from_str(&document).unwrap();
    let summary: Vec<(u64, &str)> = reports
        .iter()
        .map(|r| (r.id, r.location.as_deref().unwrap_or_default()))
        .collect();
    assert_eq!(summary, vec![(1, "Shimla"), (2, "Manali"), (3, "Kullu")]);
    assert!(document.contains("\n  {\n    \"id\": 1,"));
}

#[tokio::test]
async fn corrupt_document_fails_requests_with_server_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("disaster_reports.json");
    std::fs::write(&path, "{ not json").unwrap();
    let app = router_with(Arc::new(JsonFileStore::new(&path)));

    let listing = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(listing.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let submit = app.oneshot(post_form(VALID_FORM)).await.unwrap();
    assert_eq!(submit.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(submit.headers().get(header::SET_COOKIE).is_none());

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[tokio::test]
async fn contacts_page_lists_the_five_fixed_numbers() {
    let app = router_with(Arc::new(MemoryStore::new()));

    let html = body_text(app.oneshot(get("/contacts")).await.unwrap()).await;
    for (role, phone) in [
        ("Fire Department", "+91-101"),
        ("Ambulance", "+91-102"),
        ("Police", "+91-100"),
        ("Disaster Management Office", "+91-1800-123-456"),
        ("Local Hospital", "+91-11-12345678"),
    ] {
        assert!(html.contains(&format!("<tr><td>{}</td><td>{}</td></tr>", role, phone)));
    }
    assert_eq!(html.matches("<tr><td>").count(), 5);
}

#[tokio::test]
async fn reference_pages_ignore_report_state() {
    let store = Arc::new(MemoryStore::new());
    let app = router_with(store.clone());

    let before = body_text(app.clone().oneshot(get("/resources")).await.unwrap()).await;
    app.clone().oneshot(post_form(VALID_FORM)).await.unwrap();
    let after = body_text(app.oneshot(get("/resources")).await.unwrap()).await;

    assert_eq!(before, after);
    assert!(after.contains("<li>Drinking water (bottled)</li>"));
    assert!(after.contains("<li>If indoors during an earthquake: Drop, Cover, and Hold On.</li>"));
    assert_eq!(after.matches("<li>").count(), 14);
}

#[tokio::test]
async fn health_reports_store_status() {
    let app = router_with(Arc::new(MemoryStore::new()));

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["services"]["store"], "healthy");
}

#[tokio::test]
async fn health_reports_unreadable_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("disaster_reports.json");
    std::fs::write(&path, "{ not json").unwrap();
    let app = router_with(Arc::new(JsonFileStore::new(&path)));

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["services"]["store"], "unhealthy");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = router_with(Arc::new(MemoryStore::new()));

    let response = app.oneshot(get("/reports/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["error"]["details"], "Not found: /reports/1");
}
