//! List Users Use Case
//!
//! Retrieves every registered user in insertion order.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::User;
use crate::shared::errors::UseCaseError;

/// Use case for listing all users
pub struct ListUsersUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    /// Create a new ListUsersUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Propagates any failure reported by the repository.
    pub async fn execute(&self) -> Result<Vec<User>, UseCaseError> {
        tracing::debug!("Listing all users");

        let users = self.user_repository.find_all().await?;

        tracing::debug!(count = users.len(), "Found users");
        Ok(users)
    }
}
