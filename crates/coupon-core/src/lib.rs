//! # coupon-core: Coupon Rules and Lifecycle
//!
//! Everything a coupon *is* and every rule it obeys, with no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Coupon Service                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  coupon-api (axum)                              │   │
//! │  │   POST /coupon   GET /coupon/{id}   DELETE /coupon/{id}         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ NewCoupon / Uuid                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ coupon-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │validation │  │  service  │  │   error   │  │   │
//! │  │   │  Coupon   │  │ code/disc │  │ lifecycle │  │ CouponErr │  │   │
//! │  │   │  Status   │  │ expiry    │  │ manager   │  │ ErrorClass│  │   │
//! │  │   └───────────┘  └───────────┘  └─────┬─────┘  └───────────┘  │   │
//! │  │                                       │ store::CouponStore     │   │
//! │  └───────────────────────────────────────┼─────────────────────────┘   │
//! │                                          │                              │
//! │  ┌───────────────────────────────────────▼─────────────────────────┐   │
//! │  │                  coupon-db (SQLite)                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Coupon`, `NewCoupon`, `CouponStatus`
//! - [`validation`] - Code, discount and expiration rules
//! - [`service`] - `CouponService`, the create/get/delete/list lifecycle
//! - [`store`] - `CouponStore`, the persistence port
//! - [`error`] - `CouponError` and its classes
//!
//! ## Example Usage
//!
//! ```rust
//! use coupon_core::validation::sanitize_and_validate_code;
//! use coupon_core::CouponError;
//!
//! assert_eq!(sanitize_and_validate_code("SAVE-10").unwrap(), "SAVE10");
//! assert_eq!(sanitize_and_validate_code("OFF"), Err(CouponError::CodeInvalid));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CouponError, CouponResult, ErrorClass};
pub use service::CouponService;
pub use store::CouponStore;
pub use types::*;
pub use validation::{CODE_LENGTH, MIN_DISCOUNT_VALUE};
