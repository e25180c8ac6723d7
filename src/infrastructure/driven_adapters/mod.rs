//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - User store
//! - Configuration

pub mod config;
pub mod user_repository;

pub use config::AppConfig;
pub use user_repository::InMemoryUserRepository;
