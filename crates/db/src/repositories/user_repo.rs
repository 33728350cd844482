//! Repository for the `users` table.

use async_trait::async_trait;
use fitclass_core::types::DbId;
use sqlx::PgPool;

use super::UserStore;
use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, first_name, last_name, email, role_id, \
                       created_at, updated_at";

/// Postgres-backed [`UserStore`].
#[derive(Debug, Clone)]
pub struct UserRepo {
    pool: PgPool,
}

impl UserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user, returning the created row.
    pub async fn create(&self, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, password_hash, first_name, last_name, email, role_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.role_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(&self, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }
}

#[async_trait]
impl UserStore for UserRepo {
    async fn update(&self, id: DbId, patch: &UpdateUser) -> Result<Option<User>, sqlx::Error> {
        // Nullable columns carry a "provided" flag so an explicit null clears them.
        let query = format!(
            "UPDATE users SET
                username = COALESCE($2, username),
                password_hash = COALESCE($3, password_hash),
                first_name = CASE WHEN $4 THEN $5 ELSE first_name END,
                last_name = CASE WHEN $6 THEN $7 ELSE last_name END,
                email = CASE WHEN $8 THEN $9 ELSE email END,
                role_id = COALESCE($10, role_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&patch.username)
            .bind(&patch.password_hash)
            .bind(patch.first_name.is_some())
            .bind(patch.first_name.as_ref().and_then(Option::as_deref))
            .bind(patch.last_name.is_some())
            .bind(patch.last_name.as_ref().and_then(Option::as_deref))
            .bind(patch.email.is_some())
            .bind(patch.email.as_ref().and_then(Option::as_deref))
            .bind(patch.role_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn remove(&self, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
