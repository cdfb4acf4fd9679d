//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::error::CoreError;
use taskboard_core::search::matches_exact;
use taskboard_core::types::{DbId, Timestamp};
use taskboard_core::validation::FieldCheck;

/// A user row from the `users` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub registration_at: Timestamp,
}

/// Request body for creating or replacing a user.
///
/// `id` and `registrationAt` are read-only and ignored if sent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInput {
    #[serde(deserialize_with = "super::null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub role: String,
}

impl UserInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut check = FieldCheck::new();
        check
            .required_text("name", &self.name)
            .required_text("email", &self.email)
            .email("email", &self.email)
            .required_text("role", &self.role);
        check.finish()
    }
}

/// A user ready to insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: String,
    pub registration_at: Timestamp,
}

impl NewUser {
    pub fn from_input(input: UserInput, registration_at: Timestamp) -> Self {
        Self {
            name: input.name,
            email: input.email,
            role: input.role,
            registration_at,
        }
    }
}

/// Exact-match filters for `/search/users`.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        matches_exact(user.name.as_str(), self.name.as_deref())
            && matches_exact(user.email.as_str(), self.email.as_deref())
    }
}
