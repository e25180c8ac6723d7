//! Common test utilities for e2e tests
//!
//! Builds the full router over a fresh in-memory store and offers helpers for
//! sending requests and decoding bodies.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use serde::{Deserialize, Serialize};
use tower::util::ServiceExt;

use user_registry::infrastructure::driven_adapters::InMemoryUserRepository;
use user_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a new test application with an empty user store
    pub fn new() -> Self {
        let user_repository = Arc::new(InMemoryUserRepository::new());
        let router = api_rest::router(AppState::new(user_repository));

        Self { router }
    }

    /// Send a request without a body
    pub async fn request(&self, method: Method, uri: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// POST a raw JSON string to /users
    pub async fn post_raw(&self, body: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/users")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// POST a user to /users
    pub async fn create_user(&self, request: &CreateUserRequest) -> Response<Body> {
        self.post_raw(&serde_json::to_string(request).unwrap()).await
    }

    /// GET /users and decode the body
    pub async fn list_users(&self) -> Vec<UserResponse> {
        let response = self.request(Method::GET, "/users").await;
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        read_json(response).await
    }
}

/// Read a response body as UTF-8 text
pub async fn read_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Read a response body as JSON
pub async fn read_json<T: for<'de> Deserialize<'de>>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Helper struct for creating user request bodies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
}

impl CreateUserRequest {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

/// User response structure for deserialization
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub first_name: String,
    pub last_name: String,
}

impl UserResponse {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
