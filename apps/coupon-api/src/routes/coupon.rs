//! `/coupon` handlers.
//!
//! ```text
//! POST   /coupon        → 201 + coupon      (400 on rule or body errors)
//! GET    /coupon        → 200 + [coupon]
//! GET    /coupon/:id    → 200 + coupon      (404; 400 on non-UUID id)
//! DELETE /coupon/:id    → 204               (404, 412 when already deleted)
//! ```

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::dto::{CouponRequest, CouponResponse};
use crate::error::ApiError;
use crate::AppState;

pub async fn create_coupon(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CouponRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let coupon = state.coupons.create(request.into()).await?;
    let location = format!("/coupon/{}", coupon.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CouponResponse::from(&coupon)),
    ))
}

pub async fn get_coupon(
    State(state): State<Arc<AppState>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<CouponResponse>, ApiError> {
    let Path(id) = id?;

    let coupon = state.coupons.get_by_id(id).await?;
    Ok(Json(CouponResponse::from(&coupon)))
}

pub async fn delete_coupon(
    State(state): State<Arc<AppState>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;

    state.coupons.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_coupons(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CouponResponse>>, ApiError> {
    let coupons = state.coupons.list().await?;
    Ok(Json(coupons.iter().map(CouponResponse::from).collect()))
}
