//! Well-known role ids.
//!
//! These must match the seed data in `20191020000001_create_roles_table.sql`.

use crate::types::DbId;

pub const ROLE_ID_INSTRUCTOR: DbId = 1;
pub const ROLE_ID_CLIENT: DbId = 2;

/// Every role id a user may hold.
pub const KNOWN_ROLE_IDS: [DbId; 2] = [ROLE_ID_INSTRUCTOR, ROLE_ID_CLIENT];

/// Whether `id` names a seeded role.
pub fn is_known_role(id: DbId) -> bool {
    KNOWN_ROLE_IDS.contains(&id)
}
