use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::{
    AppState,
    error::{AppError, PageError},
    models::Product,
    views,
};

type PageResult = std::result::Result<Html<String>, PageError>;

pub async fn index(State(state): State<AppState>) -> PageResult {
    let products = state
        .store
        .sample_products(state.catalog.sample_size)
        .await?;

    Ok(Html(views::index::render_index(&products)))
}

pub async fn product(State(state): State<AppState>, Path(id): Path<String>) -> PageResult {
    let product = load_product(&state, &id).await?;

    Ok(Html(views::product::render_product(&product)))
}

pub async fn product_with_ads(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult {
    let product = load_product(&state, &id).await?;
    let ads = state.store.find_ads_for_product(product.id).await?;

    Ok(Html(views::product::render_product_with_ads(
        &product,
        &ads,
        &state.catalog.finn_ad_url,
    )))
}

async fn load_product(state: &AppState, id: &str) -> std::result::Result<Product, PageError> {
    let not_found = || PageError(AppError::NotFound("Product not found".to_string()));

    let id: i32 = id.parse().map_err(|_| not_found())?;

    state.store.find_product(id).await?.ok_or_else(not_found)
}
