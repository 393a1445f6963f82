//! Domain record management service.

use crate::domain::entities::{Domain, NewDomain, UpdateDomain};
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing domain records.
///
/// Wraps the repository and maps absent rows to [`AppError::NotFound`] so
/// handlers only deal with present records. Duplicate `(name, tld)` pairs
/// are allowed; the service performs no uniqueness checks.
pub struct DomainService {
    repository: Arc<dyn DomainRepository>,
}

impl DomainService {
    /// Creates a new domain service.
    pub fn new(repository: Arc<dyn DomainRepository>) -> Self {
        Self { repository }
    }

    /// Creates a new domain record and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_domain(&self, name: String, tld: String) -> Result<Domain, AppError> {
        self.repository.create(NewDomain { name, tld }).await
    }

    /// Lists all domain records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_domains(&self) -> Result<Vec<Domain>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a domain record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_domain(&self, id: i64) -> Result<Domain, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Domain not found", json!({"id": id})))
    }

    /// Overwrites the name and tld of an existing record and returns the
    /// updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_domain(
        &self,
        id: i64,
        update: UpdateDomain,
    ) -> Result<Domain, AppError> {
        self.repository
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::not_found("Domain not found", json!({"id": id})))
    }

    /// Deletes a domain record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_domain(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
