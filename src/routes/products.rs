use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{FinnQueryUpdate, UpdateResponse},
    services::finn_query_service,
};

pub async fn update_finn_query(
    State(state): State<AppState>,
    Path(id): Path<String>,
    update: FinnQueryUpdate,
) -> Result<Json<UpdateResponse>> {
    let product_id: i32 = id
        .parse()
        .map_err(|_| AppError::NotFound("Product not found".to_string()))?;

    finn_query_service::update_finn_query(
        state.store.as_ref(),
        product_id,
        &update,
        &state.catalog.marketplace_domain,
    )
    .await
    .map_err(|e| match e {
        AppError::DatabaseError(err) => AppError::UpdateFailed(err),
        other => other,
    })?;

    Ok(Json(UpdateResponse { success: true }))
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
