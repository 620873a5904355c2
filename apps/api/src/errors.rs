use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::batch::BatchError;
use crate::analysis::AnalysisError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Batch(#[from] BatchError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Batch(e) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
            AppError::Analysis(e @ AnalysisError::Config) => {
                tracing::error!("Oracle unavailable: {e}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "ORACLE_NOT_CONFIGURED",
                    e.to_string(),
                )
            }
            AppError::Analysis(e) => {
                tracing::error!("Clause analysis failed ({}): {e}", e.kind());
                (StatusCode::BAD_GATEWAY, "ORACLE_ERROR", e.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
