//! Repository for the `class_clients` join table.

use async_trait::async_trait;
use fitclass_core::types::DbId;
use sqlx::PgPool;

use super::EnrollmentStore;
use crate::models::class_client::{ClassClient, CreateClassClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "class_id, client_id, created_at, updated_at";

/// Postgres-backed [`EnrollmentStore`].
#[derive(Debug, Clone)]
pub struct ClassClientRepo {
    pool: PgPool,
}

impl ClassClientRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentStore for ClassClientRepo {
    async fn find_by_client(&self, client_id: DbId) -> Result<Vec<ClassClient>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM class_clients
             WHERE client_id = $1
             ORDER BY created_at, class_id"
        );
        sqlx::query_as::<_, ClassClient>(&query)
            .bind(client_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn add(&self, input: &CreateClassClient) -> Result<Option<ClassClient>, sqlx::Error> {
        let query = format!(
            "INSERT INTO class_clients (class_id, client_id)
             VALUES ($1, $2)
             ON CONFLICT (class_id, client_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClassClient>(&query)
            .bind(input.class_id)
            .bind(input.client_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn remove(&self, class_id: DbId, client_id: DbId) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM class_clients WHERE class_id = $1 AND client_id = $2")
                .bind(class_id)
                .bind(client_id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
