//! # Coupon Lifecycle
//!
//! Create, read, list and soft-delete coupons on top of a [`CouponStore`].
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │    create ──► ┌────────┐   delete   ┌─────────┐   delete                │
//! │               │ ACTIVE │ ─────────► │ DELETED │ ─────────► AlreadyDeleted│
//! │               └────────┘            └─────────┘            (no write)   │
//! │                                                                         │
//! │    get_by_id / list read both states; nothing is ever removed.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service owns its store and nothing else. Two concurrent deletes of
//! the same coupon both read ACTIVE and both write DELETED; the second
//! write wins.

use chrono::{NaiveDateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{CouponError, CouponResult};
use crate::store::CouponStore;
use crate::types::{Coupon, NewCoupon};
use crate::validation::{sanitize_and_validate_code, validate_discount, validate_expiration};

/// Coupon lifecycle manager.
#[derive(Debug, Clone)]
pub struct CouponService<S> {
    store: S,
}

impl<S: CouponStore> CouponService<S> {
    pub fn new(store: S) -> Self {
        CouponService { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates and persists a new coupon, stamped with the current UTC time.
    pub async fn create(&self, draft: NewCoupon) -> CouponResult<Coupon> {
        self.create_at(draft, Utc::now().naive_utc()).await
    }

    /// Same as [`create`](Self::create) with an explicit clock reading.
    ///
    /// ## Rules
    /// 1. Code is sanitized and must be 6 characters
    /// 2. Discount must be at least 0.5
    /// 3. Expiration must not be before `now`
    ///
    /// The first failing rule is returned and nothing is written.
    pub async fn create_at(&self, draft: NewCoupon, now: NaiveDateTime) -> CouponResult<Coupon> {
        let code = sanitize_and_validate_code(&draft.code).inspect_err(|e| {
            warn!(raw_code = %draft.code, error = e.name(), "Rejected coupon");
        })?;
        validate_discount(draft.discount_value).inspect_err(|e| {
            warn!(discount = %draft.discount_value, error = e.name(), "Rejected coupon");
        })?;
        validate_expiration(draft.expiration_date, now).inspect_err(|e| {
            warn!(expiration = %draft.expiration_date, error = e.name(), "Rejected coupon");
        })?;

        let coupon = Coupon::activate(Uuid::new_v4(), code, draft, now);
        let saved = self.store.save(&coupon).await?;

        info!(id = %saved.id(), code = saved.code(), "Coupon created");
        Ok(saved)
    }

    /// Fetches a coupon in either state.
    pub async fn get_by_id(&self, id: Uuid) -> CouponResult<Coupon> {
        debug!(%id, "Fetching coupon");

        match self.store.find_by_id(id).await? {
            Some(coupon) => Ok(coupon),
            None => {
                debug!(%id, "Coupon not found");
                Err(CouponError::NotFound)
            }
        }
    }

    /// Soft-deletes a coupon by moving it to DELETED.
    pub async fn delete(&self, id: Uuid) -> CouponResult<()> {
        let coupon = self.get_by_id(id).await?;

        let deleted = coupon
            .with_status_deleted(Utc::now().naive_utc())
            .inspect_err(|_| warn!(%id, "Coupon already deleted"))?;
        self.store.save(&deleted).await?;

        info!(%id, "Coupon deleted");
        Ok(())
    }

    /// Every stored coupon, DELETED ones included.
    pub async fn list(&self) -> CouponResult<Vec<Coupon>> {
        let coupons = self.store.find_all().await?;
        debug!(count = coupons.len(), "Listed coupons");
        Ok(coupons)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CouponStatus;
    use async_trait::async_trait;
    use chrono::{Duration, NaiveDate};
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::RwLock;

    /// HashMap-backed store that counts writes.
    #[derive(Default)]
    struct MemoryStore {
        rows: RwLock<HashMap<Uuid, Coupon>>,
        saves: AtomicUsize,
    }

    impl MemoryStore {
        fn save_count(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CouponStore for MemoryStore {
        async fn save(&self, coupon: &Coupon) -> CouponResult<Coupon> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            self.rows
                .write()
                .map_err(CouponError::internal)?
                .insert(coupon.id(), coupon.clone());
            Ok(coupon.clone())
        }

        async fn find_by_id(&self, id: Uuid) -> CouponResult<Option<Coupon>> {
            Ok(self.rows.read().map_err(CouponError::internal)?.get(&id).cloned())
        }

        async fn find_all(&self) -> CouponResult<Vec<Coupon>> {
            let mut all: Vec<Coupon> = self
                .rows
                .read()
                .map_err(CouponError::internal)?
                .values()
                .cloned()
                .collect();
            all.sort_by_key(Coupon::created_at);
            Ok(all)
        }
    }

    /// Store whose every call fails.
    struct BrokenStore;

    #[async_trait]
    impl CouponStore for BrokenStore {
        async fn save(&self, _: &Coupon) -> CouponResult<Coupon> {
            Err(CouponError::internal("database is locked"))
        }

        async fn find_by_id(&self, _: Uuid) -> CouponResult<Option<Coupon>> {
            Err(CouponError::internal("database is locked"))
        }

        async fn find_all(&self) -> CouponResult<Vec<Coupon>> {
            Err(CouponError::internal("database is locked"))
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, 1)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .unwrap()
    }

    fn draft(code: &str, discount: &str, expires_in: Duration) -> NewCoupon {
        NewCoupon {
            code: code.to_string(),
            description: Some("Summer".to_string()),
            discount_value: Decimal::from_str(discount).unwrap(),
            expiration_date: now() + expires_in,
            published: false,
        }
    }

    fn service() -> CouponService<MemoryStore> {
        CouponService::new(MemoryStore::default())
    }

    #[tokio::test]
    async fn test_create_valid_coupon() {
        let svc = service();

        let coupon = svc
            .create_at(draft("ABC123", "10", Duration::days(30)), now())
            .await
            .unwrap();

        assert_eq!(coupon.code(), "ABC123");
        assert_eq!(coupon.status(), CouponStatus::Active);
        assert!(!coupon.redeemed());
        assert_eq!(coupon.discount_value(), Decimal::from(10));
        assert_eq!(coupon.created_at(), now());

        let stored = svc.get_by_id(coupon.id()).await.unwrap();
        assert_eq!(stored, coupon);
    }

    #[tokio::test]
    async fn test_create_sanitizes_code() {
        let svc = service();
        let coupon = svc
            .create_at(draft("A-B-C-1-2-3", "1", Duration::days(1)), now())
            .await
            .unwrap();
        assert_eq!(coupon.code(), "ABC123");
    }

    #[tokio::test]
    async fn test_create_boundaries_accepted() {
        let svc = service();
        // Discount exactly 0.5, expiration exactly now
        let coupon = svc
            .create_at(draft("XYZ789", "0.5", Duration::zero()), now())
            .await
            .unwrap();
        assert_eq!(coupon.expiration_date(), now());
    }

    #[tokio::test]
    async fn test_create_rejections_write_nothing() {
        let svc = service();

        let cases = [
            (draft("AB", "10", Duration::days(1)), CouponError::CodeInvalid),
            (draft("ABC123", "0.49", Duration::days(1)), CouponError::DiscountInvalid),
            (
                draft("ABC123", "10", -Duration::seconds(1)),
                CouponError::ExpirationInvalid,
            ),
        ];

        for (input, expected) in cases {
            let err = svc.create_at(input, now()).await.unwrap_err();
            assert_eq!(err, expected);
        }

        assert_eq!(svc.store().save_count(), 0);
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_code_too_short_after_sanitizing() {
        let svc = service();

        // "A@B#C" sanitizes to "ABC"
        let err = svc
            .create_at(draft("A@B#C", "10.0", Duration::days(30)), now())
            .await
            .unwrap_err();
        assert_eq!(err, CouponError::CodeInvalid);
        assert_eq!(err.code(), "2001-1000");
        assert_eq!(svc.store().save_count(), 0);
    }

    #[tokio::test]
    async fn test_create_reports_first_failure() {
        let svc = service();
        // Everything is wrong; code is checked first
        let err = svc
            .create_at(draft("!", "0", -Duration::days(1)), now())
            .await
            .unwrap_err();
        assert_eq!(err, CouponError::CodeInvalid);

        // Code fixed; discount is next
        let err = svc
            .create_at(draft("ABC123", "0", -Duration::days(1)), now())
            .await
            .unwrap_err();
        assert_eq!(err, CouponError::DiscountInvalid);
    }

    #[tokio::test]
    async fn test_create_with_real_clock() {
        let svc = service();
        let input = NewCoupon {
            expiration_date: Utc::now().naive_utc() + Duration::days(7),
            ..draft("QWE456", "2.5", Duration::zero())
        };
        let coupon = svc.create(input).await.unwrap();
        assert!(coupon.created_at() <= coupon.expiration_date());
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let svc = service();
        let a = svc
            .create_at(draft("AAA111", "1", Duration::days(1)), now())
            .await
            .unwrap();
        let b = svc
            .create_at(draft("AAA111", "1", Duration::days(1)), now())
            .await
            .unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(svc.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let svc = service();
        let err = svc.get_by_id(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, CouponError::NotFound);
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let svc = service();
        let coupon = svc
            .create_at(draft("DEL123", "5", Duration::days(3)), now())
            .await
            .unwrap();

        svc.delete(coupon.id()).await.unwrap();
        let after_first = svc.get_by_id(coupon.id()).await.unwrap();
        assert_eq!(after_first.status(), CouponStatus::Deleted);
        assert_eq!(after_first.code(), coupon.code());
        let saves_after_first = svc.store().save_count();

        let err = svc.delete(coupon.id()).await.unwrap_err();
        assert_eq!(err, CouponError::AlreadyDeleted);

        // Rejected delete must not write
        assert_eq!(svc.store().save_count(), saves_after_first);
        let after_second = svc.get_by_id(coupon.id()).await.unwrap();
        assert_eq!(after_second, after_first);
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let svc = service();
        let err = svc.delete(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, CouponError::NotFound);
        assert_eq!(svc.store().save_count(), 0);
    }

    #[tokio::test]
    async fn test_list_includes_deleted() {
        let svc = service();
        let first = svc
            .create_at(draft("LST001", "1", Duration::days(1)), now())
            .await
            .unwrap();
        let second = svc
            .create_at(draft("LST002", "1", Duration::days(1)), now() + Duration::seconds(1))
            .await
            .unwrap();
        svc.delete(first.id()).await.unwrap();

        let all = svc.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id(), first.id());
        assert!(all[0].is_deleted());
        assert_eq!(all[1].id(), second.id());
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal() {
        let svc = CouponService::new(BrokenStore);

        let err = svc
            .create_at(draft("ABC123", "1", Duration::days(1)), now())
            .await
            .unwrap_err();
        assert!(matches!(err, CouponError::Internal(_)));

        assert!(matches!(
            svc.get_by_id(Uuid::new_v4()).await,
            Err(CouponError::Internal(_))
        ));
        assert!(matches!(svc.delete(Uuid::new_v4()).await, Err(CouponError::Internal(_))));
        assert!(matches!(svc.list().await, Err(CouponError::Internal(_))));
    }
}
