use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Product, ProductPayload, ProductQuery},
    services::product_service,
};

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductQuery>,
) -> Json<Vec<Product>> {
    Json(product_service::list_products(&state.products, &params))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Json<Product> {
    Json(product_service::create_product(&state.products, payload))
}

/// Responds with the record the update replaced; 404 when the id is unknown.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>> {
    let previous = product_service::update_product(&state.products, id, payload)
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(previous))
}

pub async fn mark_out_of_stock(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    product_service::mark_out_of_stock(&state.products, &id);
    StatusCode::NO_CONTENT
}

pub async fn mark_in_stock(State(state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    product_service::mark_in_stock(&state.products, &id, state.restock_quantity);
    StatusCode::NO_CONTENT
}

pub async fn delete_product(State(state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    product_service::delete_product(&state.products, &id);
    StatusCode::NO_CONTENT
}
