//! # Domain Types
//!
//! The coupon record and its status machine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   NewCoupon     │   │     Coupon      │   │  CouponStatus   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  raw code       │──►│  id (UUID)      │   │  Active         │       │
//! │  │  description    │   │  code (6 chars) │   │     │           │       │
//! │  │  discount_value │   │  discount ≥ 0.5 │   │     ▼           │       │
//! │  │  expiration     │   │  status         │   │  Deleted        │       │
//! │  │  published      │   │  ...            │   │  (terminal)     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Coupon` is an immutable value. The only state change is
//! [`Coupon::with_status_deleted`], which consumes the coupon and returns
//! the DELETED copy.

use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CouponError, CouponResult};

// =============================================================================
// Coupon Status
// =============================================================================

/// Lifecycle status of a coupon.
///
/// ```text
/// ACTIVE ──delete──► DELETED   (one way, DELETED is terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "UPPERCASE"))]
#[serde(rename_all = "UPPERCASE")]
pub enum CouponStatus {
    /// Usable coupon. Every coupon starts here.
    #[default]
    Active,
    /// Soft-deleted. The row is kept.
    Deleted,
}

impl CouponStatus {
    /// Wire/storage spelling (`ACTIVE` / `DELETED`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            CouponStatus::Active => "ACTIVE",
            CouponStatus::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for CouponStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// New Coupon (create request)
// =============================================================================

/// Candidate coupon as submitted by a caller, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCoupon {
    /// Raw code; may contain separators that sanitization strips.
    pub code: String,
    pub description: Option<String>,
    pub discount_value: Decimal,
    /// Naive UTC timestamp.
    pub expiration_date: NaiveDateTime,
    pub published: bool,
}

// =============================================================================
// Coupon
// =============================================================================

/// A persisted discount coupon.
#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    id: Uuid,
    code: String,
    description: Option<String>,
    discount_value: Decimal,
    expiration_date: NaiveDateTime,
    status: CouponStatus,
    published: bool,
    redeemed: bool,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

/// Plain field bundle used to rebuild a stored coupon.
///
/// Only storage adapters should need this; rows were validated when the
/// coupon was created, so [`Coupon::restore`] does not re-check them.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponParts {
    pub id: Uuid,
    pub code: String,
    pub description: Option<String>,
    pub discount_value: Decimal,
    pub expiration_date: NaiveDateTime,
    pub status: CouponStatus,
    pub published: bool,
    pub redeemed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Coupon {
    /// Builds a fresh ACTIVE coupon from already-validated fields.
    pub(crate) fn activate(
        id: Uuid,
        code: String,
        draft: NewCoupon,
        now: NaiveDateTime,
    ) -> Self {
        Coupon {
            id,
            code,
            description: draft.description,
            discount_value: draft.discount_value,
            expiration_date: draft.expiration_date,
            status: CouponStatus::Active,
            published: draft.published,
            redeemed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a coupon read back from storage.
    pub fn restore(parts: CouponParts) -> Self {
        Coupon {
            id: parts.id,
            code: parts.code,
            description: parts.description,
            discount_value: parts.discount_value,
            expiration_date: parts.expiration_date,
            status: parts.status,
            published: parts.published,
            redeemed: parts.redeemed,
            created_at: parts.created_at,
            updated_at: parts.updated_at,
        }
    }

    /// Transitions ACTIVE → DELETED.
    ///
    /// ## Returns
    /// * `Ok(Coupon)` - The DELETED copy, `updated_at` set to `now`
    /// * `Err(CouponError::AlreadyDeleted)` - Already terminal; nothing changes
    pub fn with_status_deleted(self, now: NaiveDateTime) -> CouponResult<Coupon> {
        match self.status {
            CouponStatus::Deleted => Err(CouponError::AlreadyDeleted),
            CouponStatus::Active => Ok(Coupon {
                status: CouponStatus::Deleted,
                updated_at: now,
                ..self
            }),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Sanitized six-character code.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn discount_value(&self) -> Decimal {
        self.discount_value
    }

    pub fn expiration_date(&self) -> NaiveDateTime {
        self.expiration_date
    }

    pub fn status(&self) -> CouponStatus {
        self.status
    }

    pub fn is_deleted(&self) -> bool {
        self.status == CouponStatus::Deleted
    }

    pub fn published(&self) -> bool {
        self.published
    }

    /// Always `false`: no redemption workflow exists yet.
    pub fn redeemed(&self) -> bool {
        self.redeemed
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    fn sample() -> Coupon {
        let draft = NewCoupon {
            code: "ABC-123".to_string(),
            description: Some("Spring sale".to_string()),
            discount_value: Decimal::new(100, 1),
            expiration_date: noon() + Duration::days(30),
            published: true,
        };
        Coupon::activate(Uuid::new_v4(), "ABC123".to_string(), draft, noon())
    }

    #[test]
    fn test_status_default_and_display() {
        assert_eq!(CouponStatus::default(), CouponStatus::Active);
        assert_eq!(CouponStatus::Active.to_string(), "ACTIVE");
        assert_eq!(CouponStatus::Deleted.as_str(), "DELETED");
    }

    #[test]
    fn test_activate_starts_active_and_unredeemed() {
        let coupon = sample();
        assert_eq!(coupon.status(), CouponStatus::Active);
        assert!(!coupon.redeemed());
        assert_eq!(coupon.code(), "ABC123");
        assert_eq!(coupon.created_at(), coupon.updated_at());
    }

    #[test]
    fn test_with_status_deleted() {
        let coupon = sample();
        let id = coupon.id();
        let later = noon() + Duration::hours(1);

        let deleted = coupon.with_status_deleted(later).unwrap();
        assert!(deleted.is_deleted());
        assert_eq!(deleted.id(), id);
        assert_eq!(deleted.updated_at(), later);
        assert_eq!(deleted.created_at(), noon());
    }

    #[test]
    fn test_with_status_deleted_is_terminal() {
        let deleted = sample().with_status_deleted(noon()).unwrap();
        let err = deleted.with_status_deleted(noon()).unwrap_err();
        assert_eq!(err, CouponError::AlreadyDeleted);
    }

    #[test]
    fn test_status_serde_spelling() {
        let json = serde_json::to_string(&CouponStatus::Deleted).unwrap();
        assert_eq!(json, "\"DELETED\"");

        let parsed: CouponStatus = serde_json::from_str("\"ACTIVE\"").unwrap();
        assert_eq!(parsed, CouponStatus::Active);
    }
}
