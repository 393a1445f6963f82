//! Business logic services orchestrating repository operations.

pub mod domain_service;

pub use domain_service::DomainService;
