//! Request handlers.
//!
//! Handlers delegate to the stores held in [`AppState`](crate::state::AppState)
//! and map errors via [`AppError`](crate::error::AppError).

pub mod user;
