//! User Repository Gateway
//!
//! Abstract trait defining the contract for the user store.

use async_trait::async_trait;

use crate::domain::models::user::User;
use crate::shared::errors::RepositoryError;

/// Repository trait for User storage operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find all users in insertion order
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Append a new user
    ///
    /// Implementations must check for an existing user with the same name and
    /// append in one atomic step, returning `RepositoryError::Duplicate` when
    /// the pair is already stored.
    async fn create(&self, user: &User) -> Result<User, RepositoryError>;
}
