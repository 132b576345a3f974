//! Wire shapes for `/coupon`.
//!
//! ```text
//! POST body (CouponRequest)              response (CouponResponse)
//! ─────────────────────────              ─────────────────────────
//! code            "ABC-123"              id              "7d0c…"
//! description     "optional"             code            "ABC123"
//! discountValue   10.5 | "10.5"          description     "optional" | null
//! expirationDate  see parse_expiration   discountValue   10.5
//! published       false (absent, null)   expirationDate  "2026-12-31T00:00:00"
//!                                        status          "ACTIVE" | "DELETED"
//!                                        published, redeemed
//! ```
//!
//! `discountValue` is read and written from the literal number text, so
//! `0.49999999999999999999` stays below 0.5 and no digits are lost on the
//! way back out.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use coupon_core::{Coupon, CouponStatus, NewCoupon};
use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create-coupon request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponRequest {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub discount_value: Decimal,
    #[serde(deserialize_with = "deserialize_expiration")]
    pub expiration_date: NaiveDateTime,
    #[serde(default, deserialize_with = "deserialize_published")]
    pub published: bool,
}

impl From<CouponRequest> for NewCoupon {
    fn from(req: CouponRequest) -> Self {
        NewCoupon {
            code: req.code,
            description: req.description,
            discount_value: req.discount_value,
            expiration_date: req.expiration_date,
            published: req.published,
        }
    }
}

/// Public coupon representation.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CouponResponse {
    pub id: Uuid,
    pub code: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub discount_value: Decimal,
    pub expiration_date: NaiveDateTime,
    pub status: CouponStatus,
    pub published: bool,
    pub redeemed: bool,
}

impl From<&Coupon> for CouponResponse {
    fn from(coupon: &Coupon) -> Self {
        CouponResponse {
            id: coupon.id(),
            code: coupon.code().to_string(),
            description: coupon.description().map(str::to_string),
            discount_value: coupon.discount_value(),
            expiration_date: coupon.expiration_date(),
            status: coupon.status(),
            published: coupon.published(),
            redeemed: coupon.redeemed(),
        }
    }
}

/// Parses an expiration into a naive UTC timestamp.
///
/// Accepted forms, tried in order:
/// - RFC 3339 with offset (`2026-12-31T23:00:00-03:00`), shifted to UTC
/// - naive date-time (`2026-12-31T23:00:00`, fractional seconds allowed)
/// - plain date (`2026-12-31`), meaning midnight
pub fn parse_expiration(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn deserialize_expiration<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_expiration(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid expirationDate '{raw}'")))
}

// An explicit null means "not published".
fn deserialize_published<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
