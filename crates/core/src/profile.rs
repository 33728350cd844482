//! Field rules for self-service profile updates.
//!
//! Each validator checks one field of a profile patch and returns
//! [`CoreError::Validation`] with a message naming the field.

use validator::ValidateEmail;

use crate::error::CoreError;
use crate::roles::{self, ROLE_ID_CLIENT, ROLE_ID_INSTRUCTOR};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length for a username.
pub const MAX_USERNAME_LEN: usize = 64;
/// Maximum length for a first or last name.
pub const MAX_NAME_LEN: usize = 100;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a username is non-blank and within length limits.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.trim().is_empty() {
        return Err(CoreError::Validation(
            "username must not be empty".to_string(),
        ));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(CoreError::Validation(format!(
            "username exceeds maximum length of {MAX_USERNAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a first or last name. `field` is the wire name used in the message.
pub fn validate_name(field: &str, value: &str) -> Result<(), CoreError> {
    if value.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate that an email address is syntactically valid.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "email '{email}' is not a valid address"
        )));
    }
    Ok(())
}

/// Validate that a role id names a known role.
pub fn validate_role_id(role_id: DbId) -> Result<(), CoreError> {
    if !roles::is_known_role(role_id) {
        return Err(CoreError::Validation(format!(
            "Unknown roleId: {role_id}. Valid ids: {ROLE_ID_INSTRUCTOR} (instructor), \
             {ROLE_ID_CLIENT} (client)"
        )));
    }
    Ok(())
}
