//! Integration tests for Basket.
//!
//! Tests drive the full storefront router in-process with
//! `tower::ServiceExt::oneshot`; no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p basket-integration-tests
//! ```
//!
//! [`TestClient`] plays the part of one browser: it remembers the session
//! cookie between requests, so every client has its own cart.

#![allow(clippy::unwrap_used)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use tower::ServiceExt;
use tower_sessions::MemoryStore;

use basket_storefront::catalog::Catalog;
use basket_storefront::config::StorefrontConfig;
use basket_storefront::state::AppState;

/// Catalog used by every test app.
pub const TEST_CATALOG: &str = r#"[
    {"id": "a", "name": "Apple", "price": 10},
    {"id": "b", "name": "Banana Bread", "price": 2.5}
]"#;

/// A response reduced to what the tests inspect.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `HX-Trigger` header, or an empty string.
    #[must_use]
    pub fn hx_trigger(&self) -> &str {
        self.headers
            .get("HX-Trigger")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }
}

/// One browser talking to a storefront router.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// A client for a fresh storefront with [`TEST_CATALOG`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_sessions(MemoryStore::default())
    }

    /// A client for a storefront keeping sessions in `sessions`.
    #[must_use]
    pub fn with_sessions(sessions: MemoryStore) -> Self {
        let catalog = Catalog::from_json(TEST_CATALOG).unwrap();
        let state = AppState::new(StorefrontConfig::default(), catalog);
        Self {
            app: basket_storefront::app(state, sessions),
            cookie: None,
        }
    }

    /// Send a GET request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = Request::get(uri);
        self.send(request, Body::empty()).await
    }

    /// Send a form-encoded POST request.
    pub async fn post_form(&mut self, uri: &str, form: &str) -> TestResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("HX-Request", "true");
        self.send(request, Body::from(form.to_owned())).await
    }

    /// Add one unit of a product, as the add button does.
    pub async fn add(&mut self, id: &str, name: &str, price: &str) -> TestResponse {
        let form = format!("id={id}&name={name}&price={price}");
        self.post_form("/cart/add", &form).await
    }

    /// Current badge text.
    pub async fn badge(&mut self) -> String {
        self.get("/cart/count").await.body.trim().to_string()
    }

    async fn send(&mut self, mut request: axum::http::request::Builder, body: Body) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let response = self
            .app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
