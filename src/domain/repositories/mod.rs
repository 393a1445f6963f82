//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in [`crate::infrastructure::persistence`]. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod domain_repository;

pub use domain_repository::DomainRepository;

#[cfg(test)]
pub use domain_repository::MockDomainRepository;
