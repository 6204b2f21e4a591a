// tests/support/helpers.rs
use super::mocks::{InMemoryArticles, TickingClock};
use axum::body::{self, Body};
use axum::http::{Method, Request, Response, header};
use mokkan_articles::application::services::ApplicationServices;
use mokkan_articles::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use mokkan_articles::presentation::http::{
    middleware::scanner_block::ScannerGuard, routes::build_router, state::HttpState,
};
use std::sync::Arc;

pub const BROWSER_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:115.0) Gecko/20100101 Firefox/115.0";
pub const ZAP_UA: &str = "Mozilla/5.0 (Windows NT 6.3; WOW64; rv:39.0) Gecko/20100101 Firefox/39.0 ZAP/2.7.0";

pub fn build_state_with<R>(repo: Arc<R>) -> HttpState
where
    R: ArticleReadRepository + ArticleWriteRepository + 'static,
{
    let write: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read: Arc<dyn ArticleReadRepository> = repo;
    let services = Arc::new(ApplicationServices::new(
        write,
        read,
        Arc::new(TickingClock::default()),
    ));

    HttpState {
        services,
        scanner_guard: Arc::new(ScannerGuard::default()),
    }
}

/// インメモリリポジトリ付きのテスト用ルーターを構築する
pub fn make_test_router() -> (axum::Router, Arc<InMemoryArticles>) {
    let repo = Arc::new(InMemoryArticles::default());
    (build_router(build_state_with(Arc::clone(&repo))), repo)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::USER_AGENT, BROWSER_UA)
        .body(Body::empty())
        .unwrap()
}

pub fn get_as(uri: &str, user_agent: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::USER_AGENT, user_agent)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn form(method: Method, uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let encoded = serde_urlencoded::to_string(fields).expect("encode form");
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::USER_AGENT, BROWSER_UA)
        .body(Body::from(encoded))
        .unwrap()
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location(resp: &Response<Body>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

pub fn content_type(resp: &Response<Body>) -> String {
    resp.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}
