//! # Coupon API
//!
//! HTTP front end for the coupon lifecycle.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Coupon API                                      │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  routes        │  │  dto           │  │  error                     ││
//! │  │                │  │                │  │                            ││
//! │  │ • /coupon      │  │ • CouponRequest│  │ • ApiError → status + JSON ││
//! │  │ • /coupon/:id  │  │ • CouponResp.  │  │ • ClientInput      → 400   ││
//! │  │ • /health      │  │ • expiration   │  │ • NotFound         → 404   ││
//! │  │                │  │   parsing      │  │ • PreconditionFailed → 412 ││
//! │  └───────┬────────┘  └────────────────┘  └────────────────────────────┘│
//! │          │                                                              │
//! │  ┌───────▼──────────────────────────────────────────────────────────┐  │
//! │  │  AppState                                                         │  │
//! │  │  CouponService<CouponRepository>  ──►  Database (SQLite pool)     │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `COUPON_HOST` - Bind address (default: 0.0.0.0)
//! - `COUPON_PORT` - HTTP port (default: 8080)
//! - `COUPON_DB_PATH` - SQLite file or `:memory:` (default: coupons.db)
//! - `COUPON_DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `RUST_LOG` - Log filter (default: info,coupon=debug,sqlx=warn)

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;

use coupon_core::CouponService;
use coupon_db::{CouponRepository, Database};

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::router;

/// Shared application state.
pub struct AppState {
    pub db: Database,
    pub coupons: CouponService<CouponRepository>,
}

impl AppState {
    /// Wires the lifecycle service to the database's coupon repository.
    pub fn new(db: Database) -> Self {
        let coupons = CouponService::new(db.coupons());
        AppState { db, coupons }
    }
}
