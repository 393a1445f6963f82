//! Repository trait for domain record management.

use crate::domain::entities::{Domain, NewDomain, UpdateDomain};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing domain records.
///
/// Each method performs exactly one logical database operation using a
/// connection checked out of the pool for the duration of the call. The
/// connection is returned to the pool on every exit path.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDomainRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Creates a new domain record. The database assigns the id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_domain: NewDomain) -> Result<Domain, AppError>;

    /// Finds a domain record by its database id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Domain>, AppError>;

    /// Lists all domain records, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Domain>, AppError>;

    /// Overwrites the name and tld of an existing record.
    ///
    /// Returns `None` if no record matches the id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UpdateDomain) -> Result<Option<Domain>, AppError>;

    /// Deletes a domain record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
