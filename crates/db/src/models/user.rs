//! User entity model and DTOs.

use fitclass_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserProfile`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public projection of a user (no password hash).
///
/// Field names follow the public API: camelCase names, snake_case timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub username: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(rename = "roleId")]
    pub role_id: DbId,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
            role_id: user.role_id,
        }
    }
}

/// DTO for creating a new user. Used by registration and test fixtures.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role_id: DbId,
}

/// DTO for updating an existing user. Only `Some` fields are applied.
///
/// The nullable columns take an inner `Option`: `Some(None)` clears the
/// column, `None` leaves it untouched.
///
/// `password_hash` must already be hashed; plaintext never reaches this layer.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: Option<Option<String>>,
    pub last_name: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub role_id: Option<DbId>,
}
