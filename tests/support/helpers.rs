// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use blogpress_core::application::ports::{ClockPort, MediaStorePort, SlugGeneratorPort};
use blogpress_core::application::services::{ApplicationServices, ArticleSettings};
use blogpress_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use blogpress_core::domain::content::{BannedWords, ContentAnalyzer};
use blogpress_core::presentation::http::state::HttpState;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

pub const TEST_MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// サービスとテストから覗けるモックの組
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub repo: Arc<mocks::InMemoryArticleRepo>,
    pub media: Arc<mocks::RecordingMediaStore>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_repo(mocks::InMemoryArticleRepo::new())
    }

    pub fn with_repo(repo: mocks::InMemoryArticleRepo) -> Self {
        let repo = Arc::new(repo);
        let write: Arc<dyn ArticleWriteRepository> = repo.clone();
        Self::assemble(repo, write)
    }

    /// 書き込みだけ失敗させる構成
    pub fn with_failing_writes() -> Self {
        let repo = Arc::new(mocks::InMemoryArticleRepo::new());
        let write: Arc<dyn ArticleWriteRepository> = Arc::new(mocks::FailingArticleWrite);
        Self::assemble(repo, write)
    }

    fn assemble(
        repo: Arc<mocks::InMemoryArticleRepo>,
        write: Arc<dyn ArticleWriteRepository>,
    ) -> Self {
        let read: Arc<dyn ArticleReadRepository> = repo.clone();
        let media = Arc::new(mocks::RecordingMediaStore::new());
        let media_store: Arc<MediaStorePort> = media.clone();
        let analyzer = Arc::new(ContentAnalyzer::new(BannedWords::new(["badword", "badword2"])));
        let clock: Arc<ClockPort> = Arc::new(mocks::DummyClock);
        let slugger: Arc<SlugGeneratorPort> = Arc::new(mocks::DummySlug);

        let services = Arc::new(ApplicationServices::new(
            write,
            read,
            media_store,
            analyzer,
            clock,
            slugger,
            ArticleSettings::default(),
        ));

        Self {
            services,
            repo,
            media,
        }
    }

    pub fn state(&self) -> HttpState {
        HttpState {
            services: Arc::clone(&self.services),
            upload_dir: upload_dir_for_tests(),
            max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        }
    }

    pub fn router(&self) -> axum::Router {
        blogpress_core::presentation::http::routes::build_router_with_rate_limiter(
            self.state(),
            false,
        )
    }
}

pub async fn make_test_router() -> axum::Router {
    TestContext::new().router()
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

pub fn json_request(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub const MULTIPART_BOUNDARY: &str = "X-BLOGPRESS-TEST-BOUNDARY";

/// multipart/form-data のボディを組み立てる。`file` は (ファイル名, Content-Type, 中身)
pub fn multipart_request(
    method: &str,
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> Request<Body> {
    let mut payload: Vec<u8> = Vec::new();
    for (name, value) in fields {
        payload.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, content_type, data)) = file {
        payload.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"coverPicture\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        payload.extend_from_slice(data);
        payload.extend_from_slice(b"\r\n");
    }
    payload.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(payload))
        .unwrap()
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts.headers.get("content-type").and_then(|v| v.to_str().ok()).unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

/// Assert a 400 listing a violation for `property`.
pub async fn assert_violation(resp: Response, property: &str) -> Value {
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    let errors = json["errors"].as_array().expect("errors array");
    assert!(
        errors.iter().any(|e| e["property"] == property),
        "no violation for {property}: {json}"
    );
    json
}

pub fn upload_dir_for_tests() -> PathBuf {
    std::env::temp_dir().join("blogpress-test-uploads")
}
