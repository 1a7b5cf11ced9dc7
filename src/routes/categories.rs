use axum::{Json, extract::State};

use crate::{
    AppState,
    models::{Category, CreateCategoryRequest},
    services::category_service,
};

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(category_service::list_categories(&state.categories))
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> Json<Category> {
    Json(category_service::create_category(&state.categories, request))
}
