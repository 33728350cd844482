use std::sync::Arc;

use fitclass_db::{ClassClientRepo, DbPool, EnrollmentStore, UserRepo, UserStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// The `users` store.
    pub users: Arc<dyn UserStore>,
    /// The `class_clients` enrollment store.
    pub enrollments: Arc<dyn EnrollmentStore>,
}

impl AppState {
    /// Build state backed by the Postgres repositories sharing `pool`.
    pub fn new(pool: &DbPool, config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            users: Arc::new(UserRepo::new(pool.clone())),
            enrollments: Arc::new(ClassClientRepo::new(pool.clone())),
        }
    }
}
