//! Common API plumbing

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard response envelope.
///
/// Every REST endpoint wraps its payload:
/// success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload, `null` on error
    pub data: Option<T>,
    /// Error description, `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Map a domain error onto the HTTP status it is surfaced with.
pub fn domain_error_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Standard error branch for handlers returning `ApiResponse<T>`.
pub fn domain_error_response<T>(err: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        domain_error_status(&err),
        Json(ApiResponse::error(err.to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_error_taxonomy() {
        assert_eq!(
            domain_error_status(&DomainError::not_found("Guest", "id", 1)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            domain_error_status(&DomainError::Conflict("taken".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            domain_error_status(&DomainError::InvalidRequest("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            domain_error_status(&DomainError::Database("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn envelope_serializes_without_error_field_on_success() {
        let body = serde_json::to_value(ApiResponse::success(1)).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], 1);
        assert!(body.get("error").is_none());
    }
}
