mod health;
mod pages;
mod products;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/product/{id}", get(pages::product))
        .route("/products/{id}", get(pages::product_with_ads))
        .route(
            "/api/products/{id}",
            patch(products::update_finn_query).fallback(products::method_not_allowed),
        )
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
