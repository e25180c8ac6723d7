//! User DTOs
//!
//! Data transfer objects for user API endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::models::user::{CreateUserData, User};

/// DTO for creating a new user
///
/// Missing fields decode as empty strings so that they surface as validation
/// errors rather than malformed input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,
}

impl From<CreateUserDto> for CreateUserData {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

/// User response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for UserResponseDto {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
        }
    }
}
