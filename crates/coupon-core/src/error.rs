//! # Error Types
//!
//! The business error table for coupon operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  coupon-core errors (this file)                                        │
//! │  └── CouponError      - The closed business error table                │
//! │                                                                         │
//! │  coupon-db errors (separate crate)                                     │
//! │  └── DbError          - Database failures → CouponError::Internal      │
//! │                                                                         │
//! │  coupon-api errors (in app)                                            │
//! │  └── ApiError         - What HTTP clients see (status + JSON body)     │
//! │                                                                         │
//! │  Flow: sqlx::Error → DbError → CouponError → ApiError → Client          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Error Table
//! ```text
//! ┌────────────────────┬────────────────────┬───────────┐
//! │ Variant            │ Class              │ Code      │
//! ├────────────────────┼────────────────────┼───────────┤
//! │ CodeInvalid        │ ClientInput        │ 2001-1000 │
//! │ DiscountInvalid    │ ClientInput        │ 2001-1001 │
//! │ ExpirationInvalid  │ ClientInput        │ 2001-1002 │
//! │ NotFound           │ NotFound           │ 2001-2000 │
//! │ AlreadyDeleted     │ PreconditionFailed │ 2001-2001 │
//! │ Internal           │ Internal           │ 2001-5000 │
//! └────────────────────┴────────────────────┴───────────┘
//! ```
//!
//! Every accessor below is an exhaustive `match`: adding a variant without
//! filling in its class, code and message does not compile.

use thiserror::Error;

// =============================================================================
// Error Class
// =============================================================================

/// Severity class of a business error.
///
/// The transport layer turns this into a wire status (400/404/412/500).
/// The core never mentions HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// The caller sent a value that breaks a coupon rule.
    ClientInput,
    /// The referenced coupon does not exist.
    NotFound,
    /// The coupon is in a state that forbids the operation.
    PreconditionFailed,
    /// Anything the core cannot categorize (storage outages, corrupt rows).
    Internal,
}

// =============================================================================
// Coupon Error
// =============================================================================

/// Business errors raised by the coupon lifecycle.
///
/// Exactly one of these is returned per failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CouponError {
    /// Sanitized code is not exactly six alphanumeric characters.
    #[error("Coupon code must contain exactly 6 alphanumeric characters")]
    CodeInvalid,

    /// Discount value is below the 0.5 minimum.
    #[error("Coupon discount value must be at least 0.5")]
    DiscountInvalid,

    /// Expiration date lies strictly before the creation instant.
    #[error("Coupon expiration date cannot be in the past")]
    ExpirationInvalid,

    /// No coupon is stored under the requested id.
    #[error("Coupon not found")]
    NotFound,

    /// Delete was requested for a coupon that is already DELETED.
    #[error("Coupon has already been deleted")]
    AlreadyDeleted,

    /// Uncategorized failure.
    ///
    /// The detail is for logs only; clients see the generic message.
    #[error("Internal server error")]
    Internal(String),
}

impl CouponError {
    /// Creates an Internal error from anything displayable.
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        CouponError::Internal(detail.to_string())
    }

    /// Severity class used by the transport to pick a status.
    pub fn class(&self) -> ErrorClass {
        match self {
            CouponError::CodeInvalid
            | CouponError::DiscountInvalid
            | CouponError::ExpirationInvalid => ErrorClass::ClientInput,
            CouponError::NotFound => ErrorClass::NotFound,
            CouponError::AlreadyDeleted => ErrorClass::PreconditionFailed,
            CouponError::Internal(_) => ErrorClass::Internal,
        }
    }

    /// Stable machine-readable code for client consumption.
    pub fn code(&self) -> &'static str {
        match self {
            CouponError::CodeInvalid => "2001-1000",
            CouponError::DiscountInvalid => "2001-1001",
            CouponError::ExpirationInvalid => "2001-1002",
            CouponError::NotFound => "2001-2000",
            CouponError::AlreadyDeleted => "2001-2001",
            CouponError::Internal(_) => "2001-5000",
        }
    }

    /// Stable symbolic name (e.g. `CODE_INVALID`).
    pub fn name(&self) -> &'static str {
        match self {
            CouponError::CodeInvalid => "CODE_INVALID",
            CouponError::DiscountInvalid => "DISCOUNT_INVALID",
            CouponError::ExpirationInvalid => "EXPIRATION_INVALID",
            CouponError::NotFound => "NOT_FOUND",
            CouponError::AlreadyDeleted => "ALREADY_DELETED",
            CouponError::Internal(_) => "INTERNAL",
        }
    }

    /// Human-readable message, safe to show to clients.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CouponError.
pub type CouponResult<T> = Result<T, CouponError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CouponError::CodeInvalid.to_string(),
            "Coupon code must contain exactly 6 alphanumeric characters"
        );
        assert_eq!(
            CouponError::DiscountInvalid.to_string(),
            "Coupon discount value must be at least 0.5"
        );
        assert_eq!(
            CouponError::AlreadyDeleted.message(),
            "Coupon has already been deleted"
        );
    }

    #[test]
    fn test_internal_detail_is_not_in_message() {
        let err = CouponError::internal("disk I/O error on coupons.db");
        assert_eq!(err.message(), "Internal server error");
        assert!(matches!(err, CouponError::Internal(ref d) if d.contains("disk")));
    }

    #[test]
    fn test_classes() {
        assert_eq!(CouponError::CodeInvalid.class(), ErrorClass::ClientInput);
        assert_eq!(CouponError::DiscountInvalid.class(), ErrorClass::ClientInput);
        assert_eq!(CouponError::ExpirationInvalid.class(), ErrorClass::ClientInput);
        assert_eq!(CouponError::NotFound.class(), ErrorClass::NotFound);
        assert_eq!(
            CouponError::AlreadyDeleted.class(),
            ErrorClass::PreconditionFailed
        );
        assert_eq!(
            CouponError::Internal(String::new()).class(),
            ErrorClass::Internal
        );
    }

    #[test]
    fn test_codes_are_unique() {
        let all = [
            CouponError::CodeInvalid,
            CouponError::DiscountInvalid,
            CouponError::ExpirationInvalid,
            CouponError::NotFound,
            CouponError::AlreadyDeleted,
            CouponError::Internal(String::new()),
        ];

        let mut codes: Vec<&str> = all.iter().map(CouponError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());

        assert_eq!(CouponError::NotFound.name(), "NOT_FOUND");
        assert_eq!(CouponError::NotFound.code(), "2001-2000");
    }
}
