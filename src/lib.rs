//! User Registry API
//!
//! A small in-memory user registry served over HTTP, laid out following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
