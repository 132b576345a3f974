//! # Validation Module
//!
//! The three coupon rules, as pure functions.
//!
//! ## Rule Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Create-time checks                                 │
//! │                                                                         │
//! │  raw code ──► strip non-[A-Za-z0-9] ──► len == 6 ?   ──✗── CodeInvalid  │
//! │                                             │                           │
//! │                                             ▼                           │
//! │  discount ─────────────────────────────► ≥ 0.5 ?     ──✗── Discount…   │
//! │                                             │                           │
//! │                                             ▼                           │
//! │  expiration ───────────────────────────► ≥ now ?     ──✗── Expiration… │
//! │                                             │                           │
//! │                                             ▼                           │
//! │                                        valid coupon                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lifecycle service runs these in the order shown and stops at the
//! first failure.
//!
//! ## Usage
//! ```rust
//! use coupon_core::validation::{sanitize_and_validate_code, validate_discount};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(sanitize_and_validate_code("ab-12-cd").unwrap(), "ab12cd");
//! assert!(validate_discount(Decimal::new(5, 1)).is_ok());
//! ```

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{CouponError, CouponResult};

/// Number of characters a sanitized code must have.
pub const CODE_LENGTH: usize = 6;

/// Smallest accepted discount value (0.5).
pub const MIN_DISCOUNT_VALUE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

// =============================================================================
// Code
// =============================================================================

/// Sanitizes a raw coupon code and checks its length.
///
/// ## Rules
/// - Every character outside ASCII `[A-Za-z0-9]` is dropped (separators,
///   whitespace, accented letters)
/// - Case is preserved
/// - The remainder must be exactly [`CODE_LENGTH`] characters
///
/// ## Example
/// ```rust
/// use coupon_core::validation::sanitize_and_validate_code;
///
/// assert_eq!(sanitize_and_validate_code("A-B-C-1-2-3").unwrap(), "ABC123");
/// assert!(sanitize_and_validate_code("AB").is_err());
/// ```
pub fn sanitize_and_validate_code(raw: &str) -> CouponResult<String> {
    let code: String = raw.chars().filter(char::is_ascii_alphanumeric).collect();

    if code.len() != CODE_LENGTH {
        return Err(CouponError::CodeInvalid);
    }

    Ok(code)
}

// =============================================================================
// Discount
// =============================================================================

/// Checks the discount floor. There is no upper bound.
pub fn validate_discount(value: Decimal) -> CouponResult<()> {
    if value < MIN_DISCOUNT_VALUE {
        return Err(CouponError::DiscountInvalid);
    }

    Ok(())
}

// =============================================================================
// Expiration
// =============================================================================

/// Rejects an expiration strictly before `now`.
///
/// An expiration equal to `now` is accepted.
pub fn validate_expiration(expires_at: NaiveDateTime, now: NaiveDateTime) -> CouponResult<()> {
    if expires_at < now {
        return Err(CouponError::ExpirationInvalid);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
