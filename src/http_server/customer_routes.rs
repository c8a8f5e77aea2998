//! Customer HTTP routes
//!
//! One handler per endpoint, each a single-pass pipeline:
//! parse input → validate → one (or two, for pagination) store calls → map
//! the outcome to a status code and JSON body. Handlers hold no state beyond
//! the injected store and suspend only at store-call boundaries.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};
use crate::customer::{Customer, CustomerFields};
use crate::store::CustomerStore;
use crate::validation::validate;

/// Fixed page size for the paginate endpoint
const PAGE_SIZE: i64 = 5;

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Missing `search` behaves as the empty term and matches every row
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Serialize)]
pub struct PageResponse {
    #[serde(rename = "totalCustomers")]
    pub total_customers: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    pub customers: Vec<Customer>,
}

// ==================
// Customer Routes
// ==================

/// Create customer routes
pub fn customer_routes(store: CustomerStore) -> Router {
    Router::new()
        .route("/customers", post(create_customer_handler))
        .route("/customers", get(search_customers_handler))
        .route("/customers/{id}", get(get_customer_handler))
        .route("/customers/{id}", put(update_customer_handler))
        .route("/customers/{id}", delete(delete_customer_handler))
        .route("/customers/page/{page}", get(page_customers_handler))
        .with_state(store)
}

// ==================
// Handlers
// ==================

async fn create_customer_handler(
    State(store): State<CustomerStore>,
    Json(fields): Json<CustomerFields>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    validate(&fields)?;
    let id = store.insert(&fields).await?;

    tracing::debug!(id, "customer created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Customer added successfully".to_string(),
            id,
        }),
    ))
}

async fn get_customer_handler(
    State(store): State<CustomerStore>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Customer>> {
    let row = store.get_by_id(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(row))
}

async fn update_customer_handler(
    State(store): State<CustomerStore>,
    Path(id): Path<i64>,
    Json(fields): Json<CustomerFields>,
) -> ApiResult<Json<MessageResponse>> {
    validate(&fields)?;
    let affected = store.update(id, &fields).await?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse {
        message: "Customer updated successfully".to_string(),
    }))
}

async fn delete_customer_handler(
    State(store): State<CustomerStore>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let affected = store.delete(id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse {
        message: "Customer deleted".to_string(),
    }))
}

async fn search_customers_handler(
    State(store): State<CustomerStore>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Customer>>> {
    let rows = store.search(&query.search).await?;
    Ok(Json(rows))
}

async fn page_customers_handler(
    State(store): State<CustomerStore>,
    Path(page): Path<i64>,
) -> ApiResult<Json<PageResponse>> {
    let page = page.max(1);

    // Two sequential store calls: total first, then the slice.
    let total = store.count().await?;
    let customers = store.page(page, PAGE_SIZE).await?;

    Ok(Json(PageResponse {
        total_customers: total,
        total_pages: (total + PAGE_SIZE - 1) / PAGE_SIZE,
        customers,
    }))
}
