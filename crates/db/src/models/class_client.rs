//! Class enrollment (`class_clients`) join record.

use fitclass_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `class_clients` table linking a client to a class.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ClassClient {
    #[serde(rename = "classId")]
    pub class_id: DbId,
    #[serde(rename = "clientId")]
    pub client_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for enrolling a client in a class.
#[derive(Debug, Clone, Copy)]
pub struct CreateClassClient {
    pub class_id: DbId,
    pub client_id: DbId,
}
