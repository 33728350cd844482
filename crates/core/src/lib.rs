//! Domain primitives shared by the database and API crates.

pub mod error;
pub mod profile;
pub mod roles;
pub mod types;
