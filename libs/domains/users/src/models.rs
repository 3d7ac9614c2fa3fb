use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User entity - an account that can own ads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned by the repository
    pub id: i64,
    /// Display name
    pub nickname: String,
    /// Contact address
    pub email: String,
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUser {
    pub nickname: String,
    pub email: String,
}

/// DTO for updating an existing user.
///
/// Empty fields keep their current value (partial update).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Apply updates from UpdateUser DTO; empty fields are left untouched.
    pub fn apply_update(&mut self, update: UpdateUser) {
        if !update.nickname.is_empty() {
            self.nickname = update.nickname;
        }
        if !update.email.is_empty() {
            self.email = update.email;
        }
    }
}
