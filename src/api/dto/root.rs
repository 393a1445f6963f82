//! DTO for the API root endpoint.

use serde::Serialize;

/// Welcome message pointing at the API documentation.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub docs: &'static str,
}
