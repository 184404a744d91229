//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bazaar                                 │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  POST /customer/place-order                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  JsonBody<T> extractor                                           │  │
//! │  │  Bad JSON? ──────────────── JsonRejection ──────────┐            │  │
//! │  │         │                                           │            │  │
//! │  │         ▼                                           ▼            │  │
//! │  │  Handler → RewardsEngine                                         │  │
//! │  │  Domain failure? ────────── CoreError ───────── ApiError ───────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  HTTP/1.1 400 Bad Request                                               │
//! │  { "code": "PRODUCT_UNAVAILABLE",                                       │
//! │    "message": "Product 3 unavailable: available 0, requested 1" }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::warn;

use bazaar_core::{CoreError, ValidationError};

/// API error returned from handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "CUSTOMER_NOT_FOUND",
///   "message": "Customer not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Body is not the JSON the endpoint expects (400)
    MalformedRequest,

    /// Input validation failed (400)
    ValidationError,

    /// Unknown `action` or `option` value (400)
    InvalidArgument,

    /// Customer-facing lookup of an unknown customer (400)
    CustomerNotFound,

    /// Apply-discount named an unknown coupon (400)
    CouponNotFound,

    /// Product missing or out of stock (400)
    ProductUnavailable,

    /// Resource not found (404)
    NotFound,

    /// Admin gate refused the request (403)
    Forbidden,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::MalformedRequest
            | ErrorCode::ValidationError
            | ErrorCode::InvalidArgument
            | ErrorCode::CustomerNotFound
            | ErrorCode::CouponNotFound
            | ErrorCode::ProductUnavailable => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// HTTP status this error is sent with.
    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::Validation(_) => ErrorCode::ValidationError,
            CoreError::InvalidAction(_) | CoreError::InvalidOption(_) => ErrorCode::InvalidArgument,
            CoreError::CustomerNotFound(_) => ErrorCode::CustomerNotFound,
            CoreError::CouponNotFound(_) => ErrorCode::CouponNotFound,
            CoreError::ProductUnavailable { .. } => ErrorCode::ProductUnavailable,
            CoreError::NotFound { .. } => ErrorCode::NotFound,
            CoreError::AdminAlreadySet | CoreError::InvalidSecret | CoreError::AdminNotActivated => {
                warn!(error = %err, "Admin request refused");
                ErrorCode::Forbidden
            }
        };

        let message = match err {
            CoreError::Validation(inner) => inner.to_string(),
            other => other.to_string(),
        };
        ApiError::new(code, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        CoreError::from(err).into()
    }
}

/// Converts JSON extractor rejections (bad syntax, wrong field types,
/// missing content type) to API errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(ErrorCode::MalformedRequest, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: CoreError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn test_core_error_status_mapping() {
        assert_eq!(status_of(CoreError::CustomerNotFound(1)), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(CoreError::CouponNotFound(1)), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(CoreError::ProductUnavailable {
                product_id: 1,
                available: 0,
                requested: 1
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CoreError::InvalidOption("voucher".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(CoreError::not_found("Product", 3)), StatusCode::NOT_FOUND);
        assert_eq!(status_of(CoreError::InvalidSecret), StatusCode::FORBIDDEN);
        assert_eq!(status_of(CoreError::AdminAlreadySet), StatusCode::FORBIDDEN);
        assert_eq!(status_of(CoreError::AdminNotActivated), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_validation_message_is_unwrapped() {
        let err = ApiError::from(CoreError::Validation(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "quantity must be positive");
    }

    #[test]
    fn test_error_code_wire_format() {
        let json = serde_json::to_value(ApiError::new(ErrorCode::CouponNotFound, "Coupon not found: 9"))
            .unwrap();
        assert_eq!(json["code"], "COUPON_NOT_FOUND");
        assert_eq!(json["message"], "Coupon not found: 9");
    }
}
