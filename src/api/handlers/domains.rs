//! Handlers for domain record endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::domain::{DomainItem, DomainPayload, MessageResponse};
use crate::domain::entities::{Domain, UpdateDomain};
use crate::error::AppError;
use crate::state::AppState;

fn domain_to_item(d: Domain) -> DomainItem {
    DomainItem {
        id: d.id,
        name: d.name,
        tld: d.tld,
    }
}

/// Creates a new domain record.
///
/// # Endpoint
///
/// `POST /domains/create`
///
/// # Errors
///
/// Returns 400 if `name` or `tld` is empty or over the length limit.
pub async fn create_domain_handler(
    State(state): State<AppState>,
    Json(payload): Json<DomainPayload>,
) -> Result<Json<DomainItem>, AppError> {
    payload.validate()?;

    let domain = state
        .domain_service
        .create_domain(payload.name, payload.tld)
        .await?;

    Ok(Json(domain_to_item(domain)))
}

/// Lists all domain records.
///
/// # Endpoint
///
/// `GET /domains/getall`
pub async fn list_domains_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DomainItem>>, AppError> {
    let domains = state.domain_service.list_domains().await?;

    Ok(Json(domains.into_iter().map(domain_to_item).collect()))
}

/// Retrieves a domain record by id.
///
/// # Endpoint
///
/// `GET /domains/get/{id}`
///
/// # Errors
///
/// Returns 404 if no record matches the id.
pub async fn get_domain_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DomainItem>, AppError> {
    let domain = state.domain_service.get_domain(id).await?;

    Ok(Json(domain_to_item(domain)))
}

/// Overwrites the name and tld of a domain record.
///
/// # Endpoint
///
/// `PUT /domains/update/{id}`
///
/// # Errors
///
/// Returns 400 if `name` or `tld` is empty or over the length limit.
/// Returns 404 if no record matches the id.
pub async fn update_domain_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<DomainPayload>,
) -> Result<Json<DomainItem>, AppError> {
    payload.validate()?;

    let update = UpdateDomain {
        name: payload.name,
        tld: payload.tld,
    };

    let domain = state.domain_service.update_domain(id, update).await?;

    Ok(Json(domain_to_item(domain)))
}

/// Deletes a domain record.
///
/// # Endpoint
///
/// `DELETE /domains/delete/{id}`
///
/// # Errors
///
/// Returns 404 if no record matches the id.
pub async fn delete_domain_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.domain_service.delete_domain(id).await?;

    Ok(Json(MessageResponse {
        message: "Domain deleted successfully".to_string(),
    }))
}
