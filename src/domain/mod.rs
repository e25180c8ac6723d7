//! Domain Layer
//!
//! Contains the core business rules, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::user_repository::UserRepository;
pub use models::user::{CreateUserData, User};
