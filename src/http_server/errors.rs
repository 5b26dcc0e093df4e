//! # API Errors
//!
//! Maps the service error taxonomy onto HTTP status codes and the
//! `{success:false, message}` failure envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::service::ServiceError;

use super::response::ErrorBody;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Transport-layer error: a service error plus its HTTP mapping
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(transparent)]
pub struct ApiError(#[from] ServiceError);

impl ApiError {
    /// Reject a request body before it reaches the service layer
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(ServiceError::Validation(message.into()))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            ServiceError::DuplicateEmail(_) => StatusCode::CONFLICT,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody::new(self.to_string()));
        (status, body).into_response()
    }
}
