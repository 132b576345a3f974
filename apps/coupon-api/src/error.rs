//! Error types for the Coupon API.
//!
//! Every failure leaves a handler as an [`ApiError`] and is rendered as
//! `{"status", "error", "code", "message"}`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use coupon_core::{CouponError, ErrorClass};
use serde::Serialize;
use tracing::{error, warn};

/// Code for requests that never reached the business layer.
pub const MALFORMED_REQUEST_CODE: &str = "2001-4000";

/// Coupon API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A lifecycle or validation failure.
    #[error(transparent)]
    Business(#[from] CouponError),

    /// Unparseable JSON body or path parameter.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

/// JSON error body.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub code: String,
    pub message: String,
}

/// HTTP status for a business error class.
pub fn status_for(class: ErrorClass) -> StatusCode {
    match class {
        ErrorClass::ClientInput => StatusCode::BAD_REQUEST,
        ErrorClass::NotFound => StatusCode::NOT_FOUND,
        ErrorClass::PreconditionFailed => StatusCode::PRECONDITION_FAILED,
        ErrorClass::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Business(err) => status_for(err.class()),
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn body(&self) -> ErrorBody {
        let status = self.status().as_u16();
        match self {
            ApiError::Business(err) => ErrorBody {
                status,
                error: err.name().to_string(),
                code: err.code().to_string(),
                message: err.message(),
            },
            ApiError::MalformedRequest(detail) => ErrorBody {
                status,
                error: "MALFORMED_REQUEST".to_string(),
                code: MALFORMED_REQUEST_CODE.to_string(),
                message: detail.clone(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Business(CouponError::Internal(detail)) => {
                error!(detail = %detail, "Internal error");
            }
            ApiError::MalformedRequest(detail) => {
                warn!(detail = %detail, "Malformed request");
            }
            ApiError::Business(_) => {}
        }

        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CouponError::CodeInvalid, StatusCode::BAD_REQUEST),
            (CouponError::DiscountInvalid, StatusCode::BAD_REQUEST),
            (CouponError::ExpirationInvalid, StatusCode::BAD_REQUEST),
            (CouponError::NotFound, StatusCode::NOT_FOUND),
            (CouponError::AlreadyDeleted, StatusCode::PRECONDITION_FAILED),
            (
                CouponError::internal("pool timed out"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_internal_body_hides_detail() {
        let body = ApiError::from(CouponError::internal("disk full")).body();
        assert_eq!(body.status, 500);
        assert_eq!(body.error, "INTERNAL");
        assert_eq!(body.message, "Internal server error");
    }

    #[test]
    fn test_malformed_body() {
        let body = ApiError::MalformedRequest("expected value".to_string()).body();
        assert_eq!(body.status, 400);
        assert_eq!(body.error, "MALFORMED_REQUEST");
        assert_eq!(body.code, MALFORMED_REQUEST_CODE);
    }
}
