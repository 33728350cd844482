//! Readiness endpoint, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub users: bool,
    pub enrollments: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"` when every store answers, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub stores: StoreHealth,
}

/// GET /health
///
/// Pings both stores the `/api/user` handlers depend on. Responds 503 when
/// either is unreachable so load balancers stop routing to this instance.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (users, enrollments) = tokio::join!(state.users.ping(), state.enrollments.ping());

    if let Err(e) = &users {
        tracing::warn!(error = %e, "User store ping failed");
    }
    if let Err(e) = &enrollments {
        tracing::warn!(error = %e, "Enrollment store ping failed");
    }

    let stores = StoreHealth {
        users: users.is_ok(),
        enrollments: enrollments.is_ok(),
    };
    let (code, status) = if stores.users && stores.enrollments {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            stores,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
