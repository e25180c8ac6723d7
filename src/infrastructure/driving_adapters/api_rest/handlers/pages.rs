//! Static Page Handlers
//!
//! Plain-text index and home pages, plus the 404 fallback shared by every router.

use axum::{
    http::{Method, Uri},
    routing::get,
    Router,
};

use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub const INDEX_BODY: &str = "Index page";
pub const HOME_BODY: &str = "This is home page";

/// Create the router for static pages
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index).fallback(not_found))
        .route("/home", get(home).fallback(not_found))
}

/// GET /
async fn index() -> &'static str {
    INDEX_BODY
}

/// GET /home
async fn home() -> &'static str {
    HOME_BODY
}

/// Fallback for any unmatched method or path
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, %uri, "No route matched");
    ApiError::NotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
