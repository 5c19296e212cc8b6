use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::utils::date::DateFormatError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug)]
pub enum AppError {
    /// Date string that is neither DD/MM/YYYY nor YYYY-MM-DD, or names an
    /// impossible calendar date.
    InvalidFormat(String),
    /// A required field of the write payload is absent.
    MissingField(&'static str),
    /// The submitted batch is empty or contains no usable student ids.
    EmptyBatch(String),
    /// Request body failed to deserialize.
    BadRequest(String),
    MethodNotAllowed(String),
    NotFound(String),
    Validation(Vec<String>),
    /// Backing-store failure. The cause is logged, never surfaced.
    Storage(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code, details) = match self {
            AppError::InvalidFormat(msg) => (
                StatusCode::BAD_REQUEST,
                msg,
                "INVALID_FORMAT".to_string(),
                None,
            ),
            AppError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required field: {}", field),
                "MISSING_FIELD".to_string(),
                None,
            ),
            AppError::EmptyBatch(msg) => (
                StatusCode::BAD_REQUEST,
                msg,
                "EMPTY_BATCH".to_string(),
                None,
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                msg,
                "BAD_REQUEST".to_string(),
                None,
            ),
            AppError::MethodNotAllowed(msg) => (
                StatusCode::METHOD_NOT_ALLOWED,
                msg,
                "METHOD_NOT_ALLOWED".to_string(),
                None,
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND".to_string(), None),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                "VALIDATION_ERROR".to_string(),
                Some(serde_json::json!({ "errors": errors })),
            ),
            AppError::Storage(err) => {
                tracing::error!("Storage failure: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage failure".to_string(),
                    "STORAGE_FAILURE".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            code,
            details,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Storage(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            _ => AppError::Storage(err.into()),
        }
    }
}

impl From<DateFormatError> for AppError {
    fn from(err: DateFormatError) -> Self {
        AppError::InvalidFormat(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// `axum::Json` wrapper whose rejection is reported through [`AppError`],
/// keeping malformed request bodies on the same `{error, code}` shape as
/// every other failure.
#[derive(axum::extract::FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
