//! User Use Cases
//!
//! Business logic for registering and listing users.

mod create_user;
mod list_users;

pub use create_user::CreateUserUseCase;
pub use list_users::ListUsersUseCase;
