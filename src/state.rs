//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::DomainService;

/// State shared across all request handlers.
///
/// Constructed once at startup with the concrete repository wired in and
/// passed to the router; handlers never touch ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub domain_service: Arc<DomainService>,
}
