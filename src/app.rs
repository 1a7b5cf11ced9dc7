use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    config::AppConfig,
    error::Result,
    routes,
    store::{CategoryStore, ProductStore},
};

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductStore>,
    pub categories: Arc<CategoryStore>,
    pub restock_quantity: u32,
}

pub fn build(config: &AppConfig) -> Result<Router> {
    let state = AppState {
        products: Arc::new(ProductStore::new()),
        categories: Arc::new(CategoryStore::new()),
        restock_quantity: config.stock.restock_quantity,
    };

    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                crate::error::AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allowed_origins);

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .with_state(state);

    Ok(app)
}
