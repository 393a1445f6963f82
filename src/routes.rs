//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET    /`                     - Welcome message
//! - `POST   /domains/create`       - Create a domain record
//! - `GET    /domains/getall`       - List all domain records
//! - `GET    /domains/get/{id}`     - Fetch a domain record by id
//! - `PUT    /domains/update/{id}`  - Overwrite a domain record
//! - `DELETE /domains/delete/{id}`  - Delete a domain record
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::{delete, get, post, put};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{
    create_domain_handler, delete_domain_handler, get_domain_handler, list_domains_handler,
    root_handler, update_domain_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(root_handler))
        .route("/domains/create", post(create_domain_handler))
        .route("/domains/getall", get(list_domains_handler))
        .route("/domains/get/{id}", get(get_domain_handler))
        .route("/domains/update/{id}", put(update_domain_handler))
        .route("/domains/delete/{id}", delete(delete_domain_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
