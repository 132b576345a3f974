//! # Coupon Repository
//!
//! SQLite implementation of the [`CouponStore`] port.
//!
//! ## Row Mapping
//! ```text
//! ┌──────────────────────┬──────────────────┬───────────────────────────┐
//! │ Coupon field         │ Column           │ Stored as                 │
//! ├──────────────────────┼──────────────────┼───────────────────────────┤
//! │ id: Uuid             │ id               │ TEXT (hyphenated)         │
//! │ discount_value       │ discount_value   │ TEXT ("12.50", lossless)  │
//! │ expiration_date      │ expiration_date  │ TEXT (naive UTC)          │
//! │ status               │ status           │ TEXT ACTIVE / DELETED     │
//! │ published / redeemed │ published / ...  │ INTEGER 0/1               │
//! └──────────────────────┴──────────────────┴───────────────────────────┘
//! ```
//!
//! `save` is an upsert keyed by id; `created_at` is kept from the first
//! insert.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use coupon_core::{Coupon, CouponParts, CouponResult, CouponStatus, CouponStore};
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};

const COLUMNS: &str = "id, code, description, discount_value, expiration_date, \
                       status, published, redeemed, created_at, updated_at";

/// Raw `coupons` row.
#[derive(Debug, sqlx::FromRow)]
struct CouponRow {
    id: String,
    code: String,
    description: Option<String>,
    discount_value: String,
    expiration_date: NaiveDateTime,
    status: CouponStatus,
    published: bool,
    redeemed: bool,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl TryFrom<CouponRow> for Coupon {
    type Error = DbError;

    fn try_from(row: CouponRow) -> DbResult<Self> {
        let id = Uuid::parse_str(&row.id).map_err(|e| DbError::corrupt(&row.id, "id", e))?;
        let discount_value = Decimal::from_str(&row.discount_value)
            .map_err(|e| DbError::corrupt(&row.id, "discount_value", e))?;

        Ok(Coupon::restore(CouponParts {
            id,
            code: row.code,
            description: row.description,
            discount_value,
            expiration_date: row.expiration_date,
            status: row.status,
            published: row.published,
            redeemed: row.redeemed,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }))
    }
}

/// Repository for coupon database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.coupons();
///
/// let stored = repo.upsert(&coupon).await?;
/// let again = repo.get(stored.id()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CouponRepository {
    pool: SqlitePool,
}

impl CouponRepository {
    /// Creates a new CouponRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CouponRepository { pool }
    }

    /// Inserts the coupon, or overwrites the row with the same id.
    pub async fn upsert(&self, coupon: &Coupon) -> DbResult<Coupon> {
        debug!(id = %coupon.id(), status = %coupon.status(), "Upserting coupon");

        let sql = format!(
            r#"
            INSERT INTO coupons ({COLUMNS})
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(id) DO UPDATE SET
                code            = excluded.code,
                description     = excluded.description,
                discount_value  = excluded.discount_value,
                expiration_date = excluded.expiration_date,
                status          = excluded.status,
                published       = excluded.published,
                redeemed        = excluded.redeemed,
                updated_at      = excluded.updated_at
            RETURNING {COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, CouponRow>(&sql)
            .bind(coupon.id().to_string())
            .bind(coupon.code())
            .bind(coupon.description())
            .bind(coupon.discount_value().to_string())
            .bind(coupon.expiration_date())
            .bind(coupon.status())
            .bind(coupon.published())
            .bind(coupon.redeemed())
            .bind(coupon.created_at())
            .bind(coupon.updated_at())
            .fetch_one(&self.pool)
            .await?;

        row.try_into()
    }

    /// Gets a coupon by id, in either status.
    pub async fn get(&self, id: Uuid) -> DbResult<Option<Coupon>> {
        debug!(%id, "Getting coupon by ID");

        let sql = format!("SELECT {COLUMNS} FROM coupons WHERE id = ?1");
        let row = sqlx::query_as::<_, CouponRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Coupon::try_from).transpose()
    }

    /// Lists every coupon, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Coupon>> {
        let sql = format!("SELECT {COLUMNS} FROM coupons ORDER BY created_at ASC, rowid ASC");
        let rows = sqlx::query_as::<_, CouponRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Listed coupons");
        rows.into_iter().map(Coupon::try_from).collect()
    }

    /// Number of stored coupons, DELETED included.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM coupons")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl CouponStore for CouponRepository {
    async fn save(&self, coupon: &Coupon) -> CouponResult<Coupon> {
        Ok(self.upsert(coupon).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> CouponResult<Option<Coupon>> {
        Ok(self.get(id).await?)
    }

    async fn find_all(&self) -> CouponResult<Vec<Coupon>> {
        Ok(self.list().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
