use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::dao::storage::StorageError;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage backend cannot be reached.
    #[error("storage unavailable")]
    Unavailable(#[source] StorageError),
    /// Storage backend rejected the statement.
    #[error("storage failure")]
    Storage(#[source] StorageError),
    /// A player with the requested name already exists.
    #[error("{0}")]
    Conflict(String),
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Conflict { .. } => ServiceError::Conflict(err.to_string()),
            StorageError::Unavailable { .. } => ServiceError::Unavailable(err),
            StorageError::Query { .. } => ServiceError::Storage(err),
        }
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input, including name conflicts.
    #[error("{0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("{0}")]
    NotFound(String),
    /// Storage pool unavailable.
    #[error("{0}")]
    ServiceUnavailable(String),
    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unavailable(source) => AppError::ServiceUnavailable(source.to_string()),
            ServiceError::Storage(source) => AppError::Internal(source.to_string()),
            ServiceError::Conflict(message) => AppError::BadRequest(message),
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
            ServiceError::NotFound(message) => AppError::NotFound(message),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::BadRequest(format!("validation failed: {}", err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(ErrorBody {
            error: self.to_string(),
        });

        (status, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn storage_errors_map_to_statuses() {
        let conflict: AppError = ServiceError::from(StorageError::Conflict {
            name: "Ish Smith".into(),
        })
        .into();
        assert!(matches!(&conflict, AppError::BadRequest(message) if message == "player `Ish Smith` already exists"));

        let query: AppError = ServiceError::from(StorageError::query(
            "list players".into(),
            io::Error::other("disk I/O error"),
        ))
        .into();
        assert_eq!(query.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let unavailable: AppError = ServiceError::from(StorageError::unavailable(
            "pool".into(),
            io::Error::other("timed out"),
        ))
        .into();
        assert_eq!(
            unavailable.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn not_found_keeps_its_message() {
        let err: AppError = ServiceError::NotFound("Player not found".into()).into();
        assert_eq!(err.to_string(), "Player not found");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
