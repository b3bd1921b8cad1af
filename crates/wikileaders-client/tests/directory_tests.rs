//! Integration tests for the directory client
//!
//! A mock directory API is served in-process with axum so cookie issuance,
//! rejection and refresh can be observed exactly.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use wikileaders_client::{ClientConfig, ClientError, DirectoryClient, Session, Stage};
use wikileaders_domain::Country;

#[derive(Default)]
struct MockDirectory {
    issued: AtomicUsize,
    valid: AtomicUsize,
    reject_all: AtomicBool,
    malformed_countries: AtomicBool,
    leader_requests: AtomicUsize,
}

impl MockDirectory {
    fn authorized(&self, headers: &HeaderMap) -> bool {
        if self.reject_all.load(Ordering::SeqCst) {
            return false;
        }
        let valid = self.valid.load(Ordering::SeqCst);
        let expected = format!("user_cookie=tok-{}", valid);
        valid > 0
            && headers
                .get(header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .map(|v| v == expected)
                .unwrap_or(false)
    }

    /// Invalidate every cookie issued so far
    fn expire(&self) {
        self.valid.store(0, Ordering::SeqCst);
    }
}

fn forbidden() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({"message": "The cookie is missing"})),
    )
        .into_response()
}

async fn cookie(State(state): State<Arc<MockDirectory>>) -> impl IntoResponse {
    // Widen the window in which concurrent refreshes could overlap
    tokio::time::sleep(Duration::from_millis(50)).await;
    let n = state.issued.fetch_add(1, Ordering::SeqCst) + 1;
    state.valid.store(n, Ordering::SeqCst);
    (
        [(header::SET_COOKIE, format!("user_cookie=tok-{}; Path=/", n))],
        Json(json!({"message": "The cookie has been created"})),
    )
}

async fn countries(State(state): State<Arc<MockDirectory>>, headers: HeaderMap) -> Response {
    if !state.authorized(&headers) {
        return forbidden();
    }
    if state.malformed_countries.load(Ordering::SeqCst) {
        return "<html>not json</html>".into_response();
    }
    Json(json!(["us", "be", "fr"])).into_response()
}

async fn leaders(
    State(state): State<Arc<MockDirectory>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.leader_requests.fetch_add(1, Ordering::SeqCst);
    if !state.authorized(&headers) {
        return forbidden();
    }
    match query.get("country").map(String::as_str) {
        Some("be") => Json(json!([
            {
                "id": "Q12978",
                "first_name": "Guy",
                "last_name": "Verhofstadt",
                "birth_date": "1953-04-11",
                "wikipedia_url": "https://nl.wikipedia.org/wiki/Guy_Verhofstadt"
            },
            {
                "id": "Q1",
                "first_name": null,
                "last_name": "Unknown"
            }
        ]))
        .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Country not found"})),
        )
            .into_response(),
    }
}

async fn spawn_directory(state: Arc<MockDirectory>) -> String {
    let app = Router::new()
        .route("/cookie", get(cookie))
        .route("/countries", get(countries))
        .route("/leaders", get(leaders))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn client_for(state: &Arc<MockDirectory>) -> DirectoryClient {
    let root = spawn_directory(Arc::clone(state)).await;
    let session = Session::open(ClientConfig::with_root_url(root)).unwrap();
    DirectoryClient::new(Arc::new(session))
}

#[tokio::test]
async fn test_list_countries() {
    let state = Arc::new(MockDirectory::default());
    let client = client_for(&state).await;

    let countries = client.list_countries().await.unwrap();

    let codes: Vec<_> = countries.iter().map(Country::as_str).collect();
    assert_eq!(codes, vec!["us", "be", "fr"]);
    assert_eq!(state.issued.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_list_leaders_parses_partial_records() {
    let state = Arc::new(MockDirectory::default());
    let client = client_for(&state).await;

    let leaders = client.list_leaders(&Country::from("be")).await.unwrap();

    assert_eq!(leaders.len(), 2);
    assert_eq!(leaders[0].first_name.as_deref(), Some("Guy"));
    assert_eq!(leaders[0].year_key(), "1953");
    assert!(leaders[1].first_name.is_none());
    assert!(leaders[1].wikipedia_url().is_none());
    assert!(leaders.iter().all(|l| l.first_paragraph.is_none()));
}

#[tokio::test]
async fn test_token_is_reused_across_calls() {
    let state = Arc::new(MockDirectory::default());
    let client = client_for(&state).await;

    client.list_countries().await.unwrap();
    client.list_leaders(&Country::from("be")).await.unwrap();
    client.list_leaders(&Country::from("be")).await.unwrap();

    assert_eq!(state.issued.load(Ordering::SeqCst), 1);
    assert_eq!(client.session().token_fetches(), 1);
}

#[tokio::test]
async fn test_expired_token_is_refreshed_once_and_retried() {
    let state = Arc::new(MockDirectory::default());
    let client = client_for(&state).await;

    client.list_countries().await.unwrap();
    state.expire();

    let leaders = client.list_leaders(&Country::from("be")).await.unwrap();

    assert_eq!(leaders.len(), 2);
    assert_eq!(state.issued.load(Ordering::SeqCst), 2);
    assert_eq!(state.leader_requests.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_concurrent_rejections_share_one_refresh() {
    let state = Arc::new(MockDirectory::default());
    let client = client_for(&state).await;

    client.session().ensure_token().await.unwrap();
    state.expire();

    let mut handles = Vec::new();
    for _ in 0..10 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.list_leaders(&Country::from("be")).await
        }));
    }
    for handle in handles {
        let leaders = handle.await.unwrap().unwrap();
        assert_eq!(leaders.len(), 2);
    }

    // One initial cookie, one refresh for the whole burst
    assert_eq!(state.issued.load(Ordering::SeqCst), 2);
    assert_eq!(client.session().token_fetches(), 2);
}

#[tokio::test]
async fn test_second_rejection_is_fatal() {
    let state = Arc::new(MockDirectory::default());
    state.reject_all.store(true, Ordering::SeqCst);
    let client = client_for(&state).await;

    let err = client.list_leaders(&Country::from("be")).await.unwrap_err();

    assert_eq!(err.stage, Stage::Leaders(Country::from("be")));
    assert!(err.source.is_auth());
    // Initial cookie plus exactly one refresh, then give up
    assert_eq!(state.issued.load(Ordering::SeqCst), 2);
    assert_eq!(state.leader_requests.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_malformed_countries_payload() {
    let state = Arc::new(MockDirectory::default());
    state.malformed_countries.store(true, Ordering::SeqCst);
    let client = client_for(&state).await;

    let err = client.list_countries().await.unwrap_err();

    assert_eq!(err.stage, Stage::Countries);
    assert!(matches!(err.source, ClientError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_unknown_country_is_status_error() {
    let state = Arc::new(MockDirectory::default());
    let client = client_for(&state).await;

    let err = client.list_leaders(&Country::from("xx")).await.unwrap_err();

    assert!(matches!(err.source, ClientError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_unreachable_directory_fails_at_cookie_stage() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let session = Session::open(ClientConfig::with_root_url(format!("http://{}", addr))).unwrap();
    let client = DirectoryClient::new(Arc::new(session));

    let err = client.list_countries().await.unwrap_err();

    assert_eq!(err.stage, Stage::Cookie);
    assert!(err.source.is_transport());
}
