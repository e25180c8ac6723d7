//! Create User Use Case
//!
//! Validates a candidate user and appends it to the registry.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{CreateUserData, User};
use crate::shared::errors::UseCaseError;

/// Use case for registering a new user
pub struct CreateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    /// Create a new CreateUserUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the first or last name is empty.
    /// Returns `UseCaseError::Conflict` if a user with the same name pair already exists.
    pub async fn execute(&self, data: CreateUserData) -> Result<User, UseCaseError> {
        tracing::info!(first_name = %data.first_name, last_name = %data.last_name, "Creating new user");

        let user = User::new(data).inspect_err(|err| {
            tracing::warn!(reason = %err, "Rejected invalid user");
        })?;

        let created = self.user_repository.create(&user).await.map_err(|err| {
            let err = UseCaseError::from(err);
            if let UseCaseError::Conflict(_) = err {
                tracing::warn!(user = %user, "User already exists");
            } else {
                tracing::error!(user = %user, error = %err, "Failed to store user");
            }
            err
        })?;

        tracing::info!(user = %created, "User created successfully");
        Ok(created)
    }
}
