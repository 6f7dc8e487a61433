// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{
    HeaderMap, Method, Request, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
};
use serde_json::Value;
use tower::util::ServiceExt as _;

use spotlight_core::application::services::{ApplicationServices, Repositories};
use spotlight_core::domain::author::Role;
use spotlight_core::infrastructure::{time::FixedClock, util::DefaultSlugGenerator};
use spotlight_core::presentation::http::{
    flash::{FlashMessage, FlashSigner},
    routes::{RouterConfig, build_router},
    state::HttpState,
};

use super::builders::AuthorSeed;
use super::mocks::{FakeTokenManager, InMemoryStore, PlainPasswordHasher, fixed_now};

pub const FLASH_SECRET: &str = "integration-tests-flash-secret-0123456789";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    pub flash: FlashSigner,
}

impl TestApp {
    /// Router over an empty store holding only the admin, editor and writer
    /// accounts the fake tokens resolve to.
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::default());
        AuthorSeed::new("admin").named("Ada", "Admin").role(Role::Admin).insert(&store);
        AuthorSeed::new("editor").named("Eddie", "Editor").role(Role::Editor).insert(&store);
        AuthorSeed::new("writer").named("Wren", "Writer").insert(&store);

        let repos = Repositories {
            authors: store.clone(),
            categories: store.clone(),
            article_writes: store.clone(),
            article_reads: store.clone(),
            vlogs: store.clone(),
            advertisements: store.clone(),
            comments: store.clone(),
            newsletter: store.clone(),
        };
        let services = Arc::new(ApplicationServices::new(
            repos,
            Arc::new(PlainPasswordHasher),
            Arc::new(FakeTokenManager::default()),
            Arc::new(FixedClock(fixed_now())),
            Arc::new(DefaultSlugGenerator),
        ));
        let flash = FlashSigner::new(FLASH_SECRET);
        let state = HttpState {
            services,
            flash: flash.clone(),
        };

        Self {
            router: build_router(state, &RouterConfig::default()),
            store,
            flash,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let (parts, body_stream) = response.into_parts();
        let body = body::to_bytes(body_stream, 4 * 1024 * 1024).await.unwrap();
        TestResponse {
            status,
            headers: parts.headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn get_with_flash(&self, uri: &str, message: &FlashMessage) -> TestResponse {
        let cookie = self.flash.set_cookie(message).unwrap();
        let pair = cookie.split(';').next().unwrap().to_owned();
        self.get_with_cookie(uri, &pair).await
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> TestResponse {
        self.send(
            Request::get(uri)
                .header(COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_form(&self, uri: &str, form: &[(&str, &str)]) -> TestResponse {
        let body = serde_urlencoded::to_string(form).unwrap();
        self.send(
            Request::post(uri)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .header("x-forwarded-for", "203.0.113.9")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    pub async fn api(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        json: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match json {
            Some(value) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        self.send(builder.body(body).unwrap()).await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|err| panic!("expected JSON body ({err}): {}", self.body))
    }

    pub fn location(&self) -> &str {
        self.headers
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }

    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_owned)
            .collect()
    }

    /// `name=value` of the flash cookie set by this response, if any.
    pub fn flash_cookie(&self) -> Option<String> {
        self.set_cookies()
            .into_iter()
            .map(|cookie| cookie.split(';').next().unwrap_or_default().to_owned())
            .find(|pair| pair.starts_with("flash=") && pair.len() > "flash=".len())
    }

    #[track_caller]
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(self.status, expected, "unexpected status; body: {}", self.body);
        self
    }
}

/// Assert a JSON error body with the expected status and `error` field.
#[track_caller]
pub fn assert_error_response(resp: &TestResponse, expected_status: StatusCode, expected_error: &str) {
    resp.assert_status(expected_status);
    let ct = resp
        .headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = resp.json();
    assert_eq!(json["error"].as_str().unwrap_or(""), expected_error);
    assert!(
        !json["message"].as_str().unwrap_or("").is_empty(),
        "expected non-empty message field"
    );
}
