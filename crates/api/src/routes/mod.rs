pub mod health;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /user                                 update, delete own profile (auth required)
/// /user/classes                         list own enrollments (auth required)
/// /user/classes/{id}                    enroll, withdraw (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/user", user::router())
}
