//! Domain Models
//!
//! Pure domain entities representing business concepts.

pub mod user;

pub use user::{CreateUserData, User};
