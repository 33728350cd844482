//! Handlers for the `/user` resource: the caller's own profile and class
//! enrollments.
//!
//! Every handler takes [`AuthUser`] first and acts only on `user.user_id`.

use axum::extract::State;
use axum::Json;
use fitclass_core::error::CoreError;
use fitclass_core::profile;
use fitclass_core::types::DbId;
use fitclass_db::models::class_client::{ClassClient, CreateClassClient};
use fitclass_db::models::user::{UpdateUser, UserProfile};
use serde::Deserialize;

use crate::auth::password::{check_new_password, hash_password_blocking};
use crate::error::{AppError, AppResult};
use crate::extract::{nullable, AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PUT /user`. Every field is optional; unknown fields are rejected.
///
/// The outer `Option` is "was the key present", the inner one is "was it
/// null". `null` clears `firstName`, `lastName` and `email`; it is rejected
/// for the columns that cannot be empty.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "nullable")]
    pub username: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub password: Option<Option<String>>,
    #[serde(rename = "firstName", default, deserialize_with = "nullable")]
    pub first_name: Option<Option<String>>,
    #[serde(rename = "lastName", default, deserialize_with = "nullable")]
    pub last_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub email: Option<Option<String>>,
    #[serde(rename = "roleId", default, deserialize_with = "nullable")]
    pub role_id: Option<Option<DbId>>,
}

/// Unwrap a field whose column is `NOT NULL`, rejecting an explicit `null`.
fn non_null<'a, T>(field: &str, value: &'a Option<Option<T>>) -> Result<Option<&'a T>, CoreError> {
    match value {
        Some(None) => Err(CoreError::Validation(format!("{field} must not be null"))),
        Some(Some(v)) => Ok(Some(v)),
        None => Ok(None),
    }
}

impl UpdateProfileRequest {
    /// Check every provided field against the profile rules.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(username) = non_null("username", &self.username)? {
            profile::validate_username(username)?;
        }
        if let Some(password) = non_null("password", &self.password)? {
            check_new_password(password)?;
        }
        if let Some(Some(first_name)) = &self.first_name {
            profile::validate_name("firstName", first_name)?;
        }
        if let Some(Some(last_name)) = &self.last_name {
            profile::validate_name("lastName", last_name)?;
        }
        if let Some(Some(email)) = &self.email {
            profile::validate_email(email)?;
        }
        if let Some(&role_id) = non_null("roleId", &self.role_id)? {
            profile::validate_role_id(role_id)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Profile handlers
// ---------------------------------------------------------------------------

/// PUT /api/user
///
/// Update the caller's profile. A supplied `password` is hashed before it is
/// stored; the response never includes it.
pub async fn update_profile(
    user: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<UserProfile>> {
    input.validate()?;

    let password_hash = match input.password.flatten() {
        Some(password) => Some(hash_password_blocking(password).await?),
        None => None,
    };
    let password_changed = password_hash.is_some();

    let patch = UpdateUser {
        username: input.username.flatten(),
        password_hash,
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        role_id: input.role_id.flatten(),
    };

    let updated = state
        .users
        .update(user.user_id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;

    tracing::info!(user_id = user.user_id, password_changed, "User profile updated");

    Ok(Json(UserProfile::from(&updated)))
}

/// DELETE /api/user
///
/// Permanently delete the caller's account. Responds with the number of rows
/// removed (0 or 1).
pub async fn delete_profile(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<u64>> {
    let count = state.users.remove(user.user_id).await?;

    tracing::info!(user_id = user.user_id, count, "User account deleted");

    Ok(Json(count))
}

// ---------------------------------------------------------------------------
// Enrollment handlers
// ---------------------------------------------------------------------------

/// GET /api/user/classes
///
/// List the caller's class enrollments.
pub async fn list_classes(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ClassClient>>> {
    let classes = state.enrollments.find_by_client(user.user_id).await?;
    Ok(Json(classes))
}

/// POST /api/user/classes/{id}
///
/// Enroll the caller in class `id`. Any request body is ignored.
/// Responds 409 if already enrolled, 404 if the class does not exist.
pub async fn enroll(
    user: AuthUser,
    State(state): State<AppState>,
    AppPath(class_id): AppPath<DbId>,
) -> AppResult<Json<ClassClient>> {
    let input = CreateClassClient {
        class_id,
        client_id: user.user_id,
    };

    let enrollment = state.enrollments.add(&input).await?.ok_or_else(|| {
        AppError::Core(CoreError::Conflict(format!(
            "User {} is already enrolled in class {class_id}",
            user.user_id
        )))
    })?;

    tracing::info!(user_id = user.user_id, class_id, "User enrolled in class");

    Ok(Json(enrollment))
}

/// DELETE /api/user/classes/{id}
///
/// Withdraw the caller from class `id`. Responds with the number of rows removed.
pub async fn unenroll(
    user: AuthUser,
    State(state): State<AppState>,
    AppPath(class_id): AppPath<DbId>,
) -> AppResult<Json<u64>> {
    let count = state.enrollments.remove(class_id, user.user_id).await?;

    tracing::info!(user_id = user.user_id, class_id, count, "User withdrawn from class");

    Ok(Json(count))
}
