//! Handler for the API root endpoint.

use axum::Json;

use crate::api::dto::root::RootResponse;

/// Returns a welcome message pointing at the API documentation.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to Domain Manager API",
        docs: "Visit /docs for the API documentation",
    })
}
