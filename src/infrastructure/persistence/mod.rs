//! PostgreSQL persistence: connection management and repository implementations.

pub mod db;
pub mod pg_domain_repository;

pub use db::connect_with_retry;
pub use pg_domain_repository::PgDomainRepository;
