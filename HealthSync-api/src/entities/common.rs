use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use health_sync_domain::auth::AccountServiceError;
use health_sync_domain::services::AssessmentServiceError;

/// Error response format for API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a validation error response
    pub fn validation_error(message: &str, details: Option<serde_json::Value>) -> Self {
        Self {
            error: "validation_error".to_string(),
            message: message.to_string(),
            details,
        }
    }

    /// Create a bad request error response
    pub fn bad_request(message: &str) -> Self {
        Self {
            error: "bad_request".to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Create an unauthorized error response
    pub fn unauthorized(message: &str) -> Self {
        Self {
            error: "unauthorized".to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Create an internal error response
    pub fn internal_error() -> Self {
        Self {
            error: "internal_error".to_string(),
            message: "An unexpected error occurred".to_string(),
            details: None,
        }
    }

    /// HTTP status for the error code
    pub fn status_code(&self) -> StatusCode {
        match self.error.as_str() {
            "validation_error" | "bad_request" => StatusCode::BAD_REQUEST,
            "unauthorized" => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

impl From<JsonRejection> for ErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON that does not fit the request type
            JsonRejection::JsonDataError(err) => ErrorResponse::validation_error(&err.body_text(), None),
            other => ErrorResponse::bad_request(&other.body_text()),
        }
    }
}

impl From<AssessmentServiceError> for ErrorResponse {
    fn from(err: AssessmentServiceError) -> Self {
        match err {
            AssessmentServiceError::ValidationError(msg) => ErrorResponse::validation_error(&msg, None),
        }
    }
}

impl From<AccountServiceError> for ErrorResponse {
    fn from(err: AccountServiceError) -> Self {
        match err {
            AccountServiceError::ValidationError(msg) => ErrorResponse::validation_error(&msg, None),
            AccountServiceError::MissingContact | AccountServiceError::InvalidOtp => {
                ErrorResponse::bad_request(&err.to_string())
            }
            AccountServiceError::InvalidCredentials => ErrorResponse::unauthorized(&err.to_string()),
            AccountServiceError::Unauthorized(msg) => ErrorResponse::unauthorized(&msg),
            AccountServiceError::RepositoryError(msg) => {
                tracing::error!("Account store failure: {}", msg);
                ErrorResponse::internal_error()
            }
        }
    }
}

/// Plain acknowledgement
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}
