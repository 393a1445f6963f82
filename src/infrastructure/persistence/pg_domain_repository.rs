//! PostgreSQL implementation of the domain repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Domain, NewDomain, UpdateDomain};
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;

/// PostgreSQL repository for domain records.
///
/// Every method is a single statement, so each write commits atomically on
/// its own. Queries are checked at runtime rather than compile time so the
/// crate builds without a live database.
pub struct PgDomainRepository {
    pool: Arc<PgPool>,
}

impl PgDomainRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DomainRepository for PgDomainRepository {
    async fn create(&self, new_domain: NewDomain) -> Result<Domain, AppError> {
        let domain = sqlx::query_as::<_, Domain>(
            r#"
            INSERT INTO domains (name, tld)
            VALUES ($1, $2)
            RETURNING id, name, tld
            "#,
        )
        .bind(&new_domain.name)
        .bind(&new_domain.tld)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(domain)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Domain>, AppError> {
        let domain = sqlx::query_as::<_, Domain>(
            r#"
            SELECT id, name, tld
            FROM domains
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(domain)
    }

    async fn list(&self) -> Result<Vec<Domain>, AppError> {
        let domains = sqlx::query_as::<_, Domain>(
            r#"
            SELECT id, name, tld
            FROM domains
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(domains)
    }

    async fn update(&self, id: i64, update: UpdateDomain) -> Result<Option<Domain>, AppError> {
        let domain = sqlx::query_as::<_, Domain>(
            r#"
            UPDATE domains
            SET name = $2, tld = $3
            WHERE id = $1
            RETURNING id, name, tld
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.tld)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(domain)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM domains WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Domain not found", json!({"id": id})));
        }

        Ok(())
    }
}
