//! API error type and status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use patient_registry_core::{RegistryError, ValidationErrors};

/// An error response: HTTP status plus a `{"detail": ...}` body. The
/// detail is a plain string for most failures and a structured array of
/// field violations for validation failures.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: Value,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: Value::String(detail.into()),
        }
    }

    /// Validation failure with structured per-field detail. Create uses
    /// 422, update uses 400; the caller picks.
    pub fn validation(status: StatusCode, errors: &ValidationErrors) -> Self {
        Self {
            status,
            detail: json!({
                "message": "Validation failed",
                "errors": errors,
            }),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(_) => {
                ApiError::new(StatusCode::NOT_FOUND, "Patient not found")
            }
            RegistryError::DuplicateId(_) => {
                ApiError::new(StatusCode::BAD_REQUEST, "Patient already exists")
            }
            // Default mapping is the update path's 400; the create
            // handler intercepts Invalid before this runs.
            RegistryError::Invalid(errors) => {
                ApiError::validation(StatusCode::BAD_REQUEST, &errors)
            }
            RegistryError::Store(e) => {
                tracing::error!(error = %e, "store operation failed");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
