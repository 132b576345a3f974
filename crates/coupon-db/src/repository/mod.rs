//! # Repository Module
//!
//! Database repository implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CouponService (coupon-core)                                           │
//! │       │                                                                 │
//! │       │  store.save(&coupon) / find_by_id(id) / find_all()             │
//! │       ▼                                                                 │
//! │  CouponRepository (impl CouponStore)                                   │
//! │  ├── upsert(&self, coupon)                                             │
//! │  ├── get(&self, id)                                                    │
//! │  ├── list(&self)                                                       │
//! │  └── count(&self)                                                      │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database (coupons table)                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`coupon::CouponRepository`] - Coupon upsert, lookup and listing

pub mod coupon;
