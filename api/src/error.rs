//! Unified error types for the Age API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Validation and date parsing errors from the core
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure validation errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid birth date '{input}', expected YYYY-MM-DD")]
    MalformedBirthDate { input: String },

    #[error("invalid birth date '{input}', expected YYYY-MM-DD: {source}")]
    InvalidBirthDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("birth date {birth} is after the reference date {today}")]
    FutureBirthDate { birth: NaiveDate, today: NaiveDate },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    InvalidBody(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detalle: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, detalle) = match &self {
            AppError::Domain(e) => {
                tracing::warn!("Rejected request: {}", e);
                (StatusCode::BAD_REQUEST, "Datos inválidos", Some(e.to_string()))
            }
            AppError::InvalidBody(msg) => {
                tracing::warn!("Rejected request body: {}", msg);
                (StatusCode::BAD_REQUEST, "Datos inválidos", Some(msg.clone()))
            }
            AppError::Spreadsheet(e) => {
                tracing::error!("Spreadsheet error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error interno", None)
            }
        };

        let body = Json(ErrorResponse { error, detalle });

        (status, body).into_response()
    }
}
