use axum::{extract::State, Json};
use serde::Serialize;

use crate::{error::Result, AppState};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<&'static str>,
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        store: None,
    })
}

/// Ready once the store answers a round trip.
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<HealthStatus>> {
    state.store.check_health().await?;

    Ok(Json(HealthStatus {
        status: "ready",
        store: Some(state.store.backend()),
    }))
}
