//! User Domain Model
//!
//! Represents a registered user. A user has no identifier of its own; it is
//! identified by its first and last name together.

use crate::shared::errors::DomainError;

/// Data required to create a new User
#[derive(Debug, Clone, Default)]
pub struct CreateUserData {
    pub first_name: String,
    pub last_name: String,
}

impl CreateUserData {
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    first_name: String,
    last_name: String,
}

impl User {
    /// Create a new User from creation data
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FirstNameRequired` if the first name is empty, then
    /// `DomainError::LastNameRequired` if the last name is empty.
    pub fn new(data: CreateUserData) -> Result<Self, DomainError> {
        if data.first_name.is_empty() {
            return Err(DomainError::FirstNameRequired);
        }
        if data.last_name.is_empty() {
            return Err(DomainError::LastNameRequired);
        }

        Ok(Self {
            first_name: data.first_name,
            last_name: data.last_name,
        })
    }

    /// Whether both users carry the same (first name, last name) pair
    #[must_use]
    pub fn same_name_as(&self, other: &User) -> bool {
        self.first_name == other.first_name && self.last_name == other.last_name
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_new() {
        let user = User::new(CreateUserData::new("Ada", "Lovelace")).unwrap();

        assert_eq!(user.first_name(), "Ada");
        assert_eq!(user.last_name(), "Lovelace");
        assert_eq!(user.to_string(), "Ada Lovelace");
    }

    #[test]
    fn test_user_new_requires_first_name() {
        let result = User::new(CreateUserData::new("", "Lovelace"));
        assert!(matches!(result, Err(DomainError::FirstNameRequired)));
    }

    #[test]
    fn test_user_new_requires_last_name() {
        let result = User::new(CreateUserData::new("Ada", ""));
        assert!(matches!(result, Err(DomainError::LastNameRequired)));
    }

    #[test]
    fn test_user_new_reports_first_name_before_last_name() {
        let result = User::new(CreateUserData::default());
        assert!(matches!(result, Err(DomainError::FirstNameRequired)));
    }

    #[test]
    fn test_user_new_accepts_whitespace_names() {
        assert!(User::new(CreateUserData::new(" ", " ")).is_ok());
    }

    #[test]
    fn test_same_name_as_is_case_sensitive() {
        let ada = User::new(CreateUserData::new("Ada", "Lovelace")).unwrap();
        let same = User::new(CreateUserData::new("Ada", "Lovelace")).unwrap();
        let lower = User::new(CreateUserData::new("ada", "lovelace")).unwrap();
        let other = User::new(CreateUserData::new("Ada", "Byron")).unwrap();

        assert!(ada.same_name_as(&same));
        assert!(!ada.same_name_as(&lower));
        assert!(!ada.same_name_as(&other));
    }
}
