//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation and
//! update inputs are separate structs (`NewDomain`, `UpdateDomain`) so that
//! the database-assigned `id` can never be supplied by a caller.

pub mod domain;

pub use domain::{Domain, NewDomain, UpdateDomain};
