//! Integration tests for the biography fetcher against an in-process page server

use axum::{http::header, http::HeaderMap, http::StatusCode, response::Html, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use wikileaders_client::{ClientConfig, ClientError, Session};
use wikileaders_domain::LeaderRecord;
use wikileaders_extractor::{
    extract_biography, BiographyFetcher, ExtractorConfig, ExtractorError, ParagraphSelector,
    DEFAULT_USER_AGENT,
};

const PAGE: &str = "<html><body><p>Ada Lovelace[1] (born 1815) was an English mathematician and writer, \
                    chiefly known for her work on Charles Babbage's proposed mechanical computer.</p></body></html>";

async fn wiki(headers: HeaderMap) -> (StatusCode, Html<String>) {
    let agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if agent != DEFAULT_USER_AGENT {
        return (StatusCode::FORBIDDEN, Html("<p>Please set a user agent</p>".to_string()));
    }
    (StatusCode::OK, Html(PAGE.to_string()))
}

async fn missing() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html("<p>Wikipedia does not have an article with this exact name.</p>"))
}

async fn spawn_wiki() -> String {
    let app = Router::new()
        .route("/wiki/Ada_Lovelace", get(wiki))
        .route("/wiki/Nobody", get(missing));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn fetcher() -> BiographyFetcher {
    // Page URLs are absolute, so the directory root is irrelevant here
    let session = Session::open(ClientConfig::with_root_url("http://127.0.0.1:1")).unwrap();
    BiographyFetcher::new(Arc::new(session), &ExtractorConfig::default()).unwrap()
}

#[tokio::test]
async fn test_fetch_sends_user_agent() {
    let base = spawn_wiki().await;

    let html = fetcher()
        .fetch_page(&format!("{}/wiki/Ada_Lovelace", base))
        .await
        .unwrap();

    assert!(html.contains("Ada Lovelace[1]"));
}

#[tokio::test]
async fn test_fetched_page_yields_biography() {
    let base = spawn_wiki().await;
    let leader = LeaderRecord::new("Ada", "Lovelace").with_birth_date("1815-12-10");

    let html = fetcher()
        .fetch_page(&format!("{}/wiki/Ada_Lovelace", base))
        .await
        .unwrap();
    let paragraph = extract_biography(&leader, &html, &ParagraphSelector::default());

    assert!(paragraph.starts_with("Ada Lovelace (born 1815) was an English mathematician"));
}

#[tokio::test]
async fn test_error_status_still_returns_body() {
    let base = spawn_wiki().await;

    let html = fetcher()
        .fetch_page(&format!("{}/wiki/Nobody", base))
        .await
        .unwrap();

    assert!(html.contains("does not have an article"));
}

#[tokio::test]
async fn test_unreachable_page_is_fetch_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = fetcher().fetch_page(&format!("http://{}/wiki/Ada_Lovelace", addr)).await;

    match result {
        Err(ExtractorError::Fetch(e)) => assert!(e.is_transport()),
        other => panic!("Expected fetch error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_relative_url_is_never_resolved_against_root() {
    let base = spawn_wiki().await;
    // Rooted at the page server, so a resolved relative URL would succeed
    let session = Session::open(ClientConfig::with_root_url(base)).unwrap();
    let fetcher = BiographyFetcher::new(Arc::new(session), &ExtractorConfig::default()).unwrap();

    for url in ["wiki/Ada_Lovelace", "/wiki/Ada_Lovelace", "en.wikipedia.org/wiki/Ada_Lovelace"] {
        match fetcher.fetch_page(url).await {
            Err(ExtractorError::Fetch(ClientError::InvalidUrl(_))) => {}
            other => panic!("Expected invalid URL for {}, got {:?}", url, other),
        }
    }
}

#[tokio::test]
async fn test_non_http_url_rejected() {
    let result = fetcher().fetch_page("ftp://en.wikipedia.org/wiki/Ada_Lovelace").await;
    assert!(matches!(
        result,
        Err(ExtractorError::Fetch(ClientError::InvalidUrl(_)))
    ));
}

#[test]
fn test_invalid_config_rejected() {
    let session = Session::open(ClientConfig::default()).unwrap();
    let config = ExtractorConfig {
        min_paragraph_chars: 0,
        ..Default::default()
    };

    let result = BiographyFetcher::new(Arc::new(session), &config);
    assert!(matches!(result, Err(ExtractorError::Config(_))));
}
