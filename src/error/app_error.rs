use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(sqlx::Error),
    /// Storage failure while applying a finn query update.
    UpdateFailed(sqlx::Error),
    ConfigError(String),
    InternalError(String),
    NotFound(String),
    ValidationError(String),
    MethodNotAllowed,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_)
            | AppError::UpdateFailed(_)
            | AppError::ConfigError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Message that is safe to hand back to a client. The detail of every
    /// server-side failure is logged here and never returned.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::DatabaseError(e) => {
                tracing::error!("Database error: {:?}", e);
                "Internal server error"
            }
            AppError::UpdateFailed(e) => {
                tracing::error!("Failed to update query: {:?}", e);
                "Failed to update query"
            }
            AppError::ConfigError(msg) => {
                tracing::error!("Configuration error: {}", msg);
                "Server configuration error"
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error"
            }
            AppError::NotFound(msg) => msg.as_str(),
            AppError::ValidationError(msg) => msg.as_str(),
            AppError::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(e) => write!(f, "Database error: {}", e),
            AppError::UpdateFailed(e) => write!(f, "Failed to update query: {}", e),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::MethodNotAllowed => write!(f, "Method not allowed"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::DatabaseError(e) | AppError::UpdateFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err)
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = Json(json!({
            "success": false,
            "message": self.public_message(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_errors_do_not_leak_detail() {
        let err = AppError::DatabaseError(sqlx::Error::PoolTimedOut);

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn internal_errors_use_fixed_messages() {
        let err = AppError::InternalError("Malformed url key: \"zz\"".to_string());
        assert_eq!(err.public_message(), "Internal server error");

        let err = AppError::UpdateFailed(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Failed to update query");

        let err = AppError::ConfigError("DB_URL not set".to_string());
        assert_eq!(err.public_message(), "Server configuration error");
    }

    #[test]
    fn client_errors_keep_their_message() {
        let err = AppError::ValidationError("finn_query must be a string".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "finn_query must be a string");

        let err = AppError::NotFound("Product not found".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        assert_eq!(
            AppError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
