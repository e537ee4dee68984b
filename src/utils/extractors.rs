use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use crate::{
    error::{AppError, Result},
    models::FinnQueryUpdate,
};

impl FinnQueryUpdate {
    pub fn from_value(body: &Value) -> Result<Self> {
        let finn_query = body
            .get("finn_query")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::ValidationError("finn_query must be a string".to_string()))?;

        if finn_query.trim().is_empty() {
            return Err(AppError::ValidationError(
                "finn_query must not be empty".to_string(),
            ));
        }

        Ok(Self {
            finn_query: finn_query.to_string(),
        })
    }
}

impl<S> FromRequest<S> for FinnQueryUpdate
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected update body: {}", rejection.body_text());
                AppError::ValidationError("finn_query must be a string".to_string())
            })?;

        Self::from_value(&body)
    }
}
