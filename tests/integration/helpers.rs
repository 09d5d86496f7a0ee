//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use tower::ServiceExt;

use docshelf_api::AppState;
use docshelf_auth::{MemoryCredentialStore, PasswordHasher};
use docshelf_core::config::AppConfig;
use docshelf_core::traits::CredentialStore;
use docshelf_storage::MemoryDocumentStore;

/// Documents every test app starts with.
pub const SEED_DOCUMENTS: [(&str, &str); 4] = [
    ("about.txt", "Docshelf keeps documents."),
    ("changes.txt", "old content"),
    ("history.txt", "1993 - Yukihiro Matsumoto dreams up Ruby."),
    ("titles.md", "# title\n\nsome markdown"),
];

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for inspecting stores directly
    pub state: AppState,
    /// Session cookie captured from the last `Set-Cookie`
    cookie: Mutex<Option<String>>,
}

impl TestApp {
    /// Create a test app with seeded documents and an `admin`/`secret` account.
    pub async fn new() -> Self {
        let documents = Arc::new(MemoryDocumentStore::with_documents(SEED_DOCUMENTS));

        let credentials = Arc::new(MemoryCredentialStore::new(PasswordHasher::new()));
        credentials
            .create("admin", "secret")
            .await
            .expect("Failed to seed admin account");

        let state = AppState::new(AppConfig::default(), documents, credentials);
        let router = docshelf_api::build_app(state.clone());

        Self {
            router,
            state,
            cookie: Mutex::new(None),
        }
    }

    /// Create a test app that is already signed in as `admin`.
    pub async fn signed_in() -> Self {
        let app = Self::new().await;
        let response = app.sign_in("admin", "secret").await;
        assert_eq!(response.status, StatusCode::FOUND, "sign-in failed: {}", response.body);
        app
    }

    /// POST the sign-in form.
    pub async fn sign_in(&self, username: &str, password: &str) -> TestResponse {
        self.post_form(
            "/users/signin",
            &[("username", username), ("password", password)],
        )
        .await
    }

    /// The `name=value` pair currently sent as the session cookie.
    pub fn cookie(&self) -> Option<String> {
        self.cookie.lock().expect("cookie lock").clone()
    }

    /// Replace the session cookie sent with later requests.
    pub fn use_cookie(&self, cookie: Option<String>) {
        *self.cookie.lock().expect("cookie lock") = cookie;
    }

    /// GET `path`.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(Request::builder().method("GET").uri(path), Body::empty())
            .await
    }

    /// POST an urlencoded form to `path`.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        let body = serde_urlencoded::to_string(fields).expect("Failed to encode form");
        self.send(builder, Body::from(body)).await
    }

    /// POST with no body, as the delete script does.
    pub async fn post_xhr(&self, path: &str) -> TestResponse {
        let builder = Request::builder()
            .method("POST")
            .uri(path)
            .header("X-Requested-With", "XMLHttpRequest");
        self.send(builder, Body::empty()).await
    }

    /// Make an HTTP request, carrying the session cookie across calls.
    async fn send(&self, mut builder: axum::http::request::Builder, body: Body) -> TestResponse {
        if let Some(cookie) = self.cookie.lock().expect("cookie lock").clone() {
            builder = builder.header(header::COOKIE, cookie);
        }
        let req = builder.body(body).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();

        if let Some(set_cookie) = headers.get(header::SET_COOKIE) {
            let pair = set_cookie
                .to_str()
                .expect("cookie is ascii")
                .split(';')
                .next()
                .unwrap_or_default()
                .to_string();
            *self.cookie.lock().expect("cookie lock") = Some(pair);
        }

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body = String::from_utf8_lossy(&body_bytes).into_owned();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Body as text
    pub body: String,
}

impl TestResponse {
    /// The `Location` header, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// The `Content-Type` header, or an empty string.
    pub fn content_type(&self) -> &str {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    /// Assert a `302` redirect to `/`.
    pub fn assert_redirect_home(&self) {
        assert_eq!(self.status, StatusCode::FOUND, "body: {}", self.body);
        assert_eq!(self.location(), Some("/"));
    }
}
