//! # Storage Port
//!
//! The persistence seam between the lifecycle service and a database.
//!
//! ```text
//! ┌────────────────────┐   CouponStore    ┌─────────────────────────┐
//! │  CouponService     │ ───────────────► │ coupon-db               │
//! │  (coupon-core)     │  save            │ CouponRepository        │
//! │                    │  find_by_id      │ (SQLite via sqlx)       │
//! │                    │  find_all        │                         │
//! └────────────────────┘                  └─────────────────────────┘
//! ```
//!
//! Implementations report every failure as [`CouponError::Internal`];
//! a missing row is `Ok(None)`, never an error.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CouponResult;
use crate::types::Coupon;

#[cfg(doc)]
use crate::error::CouponError;

/// Coupon persistence.
#[async_trait]
pub trait CouponStore: Send + Sync {
    /// Inserts or replaces the coupon with the same id, returning what was stored.
    async fn save(&self, coupon: &Coupon) -> CouponResult<Coupon>;

    /// Looks up one coupon, DELETED ones included.
    async fn find_by_id(&self, id: Uuid) -> CouponResult<Option<Coupon>>;

    /// Every stored coupon, oldest first.
    async fn find_all(&self) -> CouponResult<Vec<Coupon>>;
}
