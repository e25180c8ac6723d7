//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::users::{CreateUserUseCase, ListUsersUseCase};
use crate::domain::gateways::UserRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub list_users_use_case: Arc<ListUsersUseCase>,
    pub create_user_use_case: Arc<CreateUserUseCase>,
}

impl AppState {
    /// Wire the use cases over a single user repository
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            list_users_use_case: Arc::new(ListUsersUseCase::new(user_repository.clone())),
            create_user_use_case: Arc::new(CreateUserUseCase::new(user_repository)),
        }
    }
}

/// Build the full application router with its middleware stack
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::pages::router())
        .merge(handlers::users::router())
        .fallback(handlers::pages::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .with_state(state)
}
