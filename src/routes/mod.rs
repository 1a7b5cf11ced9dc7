mod categories;
mod health;
mod products;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            put(products::update_product).delete(products::delete_product),
        )
        .route("/products/{id}/outofstock", post(products::mark_out_of_stock))
        .route("/products/{id}/instock", put(products::mark_in_stock))
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
}
