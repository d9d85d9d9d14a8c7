//! API Handlers
//!
//! HTTP request handlers for each customer service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{Result, ServiceError};
use crate::models::{
    CacheStatsResponse, CreateCustomerRequest, Customer, HealthResponse, UpdateCustomerRequest,
};
use crate::service::CustomerService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared customer service (repository + cache pair)
    pub service: Arc<CustomerService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: Arc<CustomerService>) -> Self {
        Self { service }
    }
}

/// Handler for POST /customers
///
/// Validates the payload, then creates the customer. Returns 201 on
/// success, 409 on a duplicate code.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(mut req): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<Customer>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::Validation(error_msg));
    }

    let created = state.service.create(&req.code, &req.name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for GET /customers/:code
pub async fn get_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Customer>> {
    let customer = state.service.get(&code).await?;
    Ok(Json(customer))
}

/// Handler for GET /customers
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<Customer>>> {
    let customers = state.service.list().await?;
    Ok(Json(customers))
}

/// Handler for PUT /customers/:code
pub async fn update_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(req): Json<UpdateCustomerRequest>,
) -> Result<Json<Customer>> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::Validation(error_msg));
    }

    let updated = state.service.update(&code, &req.name).await?;
    Ok(Json(updated))
}

/// Handler for DELETE /customers/:code
///
/// Returns 204 with no body on success.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode> {
    state.service.delete(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /stats
///
/// Returns current counters for both caches.
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let (item, list) = state.service.cache_stats().await;
    Json(CacheStatsResponse::new(item, list))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
