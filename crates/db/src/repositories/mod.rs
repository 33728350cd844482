//! Storage ports used by the API handlers and their Postgres implementations.
//!
//! Handlers hold `Arc<dyn UserStore>` / `Arc<dyn EnrollmentStore>` so the HTTP
//! layer can be driven against any backend that honours these contracts.

use async_trait::async_trait;
use fitclass_core::types::DbId;

use crate::models::class_client::{ClassClient, CreateClassClient};
use crate::models::user::{UpdateUser, User};

pub mod class_client_repo;
pub mod user_repo;

pub use class_client_repo::ClassClientRepo;
pub use user_repo::UserRepo;

/// Persistence operations on the `users` table.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Apply `patch` to user `id`, returning the updated row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    async fn update(&self, id: DbId, patch: &UpdateUser) -> Result<Option<User>, sqlx::Error>;

    /// Permanently delete user `id`. Returns the number of rows removed.
    async fn remove(&self, id: DbId) -> Result<u64, sqlx::Error>;

    /// Confirm the backing storage can serve requests.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// Persistence operations on the `class_clients` join table.
#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    /// All enrollments belonging to `client_id`.
    async fn find_by_client(&self, client_id: DbId) -> Result<Vec<ClassClient>, sqlx::Error>;

    /// Insert an enrollment, returning the created row.
    ///
    /// Returns `None` if the `(class_id, client_id)` pair already exists.
    async fn add(&self, input: &CreateClassClient) -> Result<Option<ClassClient>, sqlx::Error>;

    /// Delete the `(class_id, client_id)` enrollment. Returns the number of rows removed.
    async fn remove(&self, class_id: DbId, client_id: DbId) -> Result<u64, sqlx::Error>;

    /// Confirm the backing storage can serve requests.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
