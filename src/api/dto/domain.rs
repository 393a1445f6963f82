//! DTOs for domain record endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for creating or updating a domain record.
///
/// Both fields are required. Validation is type/length only: the name is not
/// checked against any format and the tld is not checked against a registry.
#[derive(Debug, Deserialize, Validate)]
pub struct DomainPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 10))]
    pub tld: String,
}

/// A domain record as returned by the API.
#[derive(Debug, Serialize)]
pub struct DomainItem {
    pub id: i64,
    pub name: String,
    pub tld: String,
}

/// Confirmation message returned by the delete endpoint.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
