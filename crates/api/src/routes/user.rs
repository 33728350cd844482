//! Route definitions for the `/user` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// All routes require authentication (enforced by the `AuthUser` extractor).
///
/// ```text
/// PUT    /              -> update_profile
/// DELETE /              -> delete_profile
/// GET    /classes       -> list_classes
/// POST   /classes/{id}  -> enroll
/// DELETE /classes/{id}  -> unenroll
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", put(user::update_profile).delete(user::delete_profile))
        .route("/classes", get(user::list_classes))
        .route("/classes/{id}", post(user::enroll).delete(user::unenroll))
}
