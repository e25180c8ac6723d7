//! In-Memory User Repository Implementation
//!
//! Implements the UserRepository trait over a `Vec` guarded by a tokio `RwLock`.
//! Contents live for the lifetime of the repository and are never persisted.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::User;
use crate::shared::errors::RepositoryError;

/// In-memory implementation of UserRepository preserving insertion order
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty InMemoryUserRepository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.read().await.clone())
    }

    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        // The write guard spans the duplicate check and the push.
        let mut users = self.users.write().await;

        if users.iter().any(|existing| existing.same_name_as(user)) {
            return Err(RepositoryError::Duplicate {
                first_name: user.first_name().to_string(),
                last_name: user.last_name().to_string(),
            });
        }

        users.push(user.clone());
        tracing::debug!(count = users.len(), "User appended to store");

        Ok(user.clone())
    }
}
