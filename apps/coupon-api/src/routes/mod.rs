//! HTTP routing.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  TraceLayer (one span per request)                           │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │  /coupon         POST create      GET list             │  │
//! │  │  /coupon/:id     GET get_by_id    DELETE soft delete   │  │
//! │  │  /health         GET                                   │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod coupon;
pub mod health;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/coupon",
            get(coupon::list_coupons).post(coupon::create_coupon),
        )
        .route(
            "/coupon/:id",
            get(coupon::get_coupon).delete(coupon::delete_coupon),
        )
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use coupon_db::{Database, DbConfig};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::AppState;

    /// Router over a fresh in-memory database, plus the database handle.
    pub async fn test_app_with_db() -> (Router, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let app = super::router(Arc::new(AppState::new(db.clone())));
        (app, db)
    }

    pub async fn test_app() -> Router {
        test_app_with_db().await.0
    }

    /// Sends one request; a body that is not JSON (or empty) comes back as `Null`.
    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let raw = body.map(|json| json.to_string());
        send_raw(app, method, uri, raw.as_deref()).await
    }

    /// Like [`send`], with the body passed as literal JSON text.
    ///
    /// Numbers are sent exactly as written, which `json!` cannot do for
    /// values an `f64` would round.
    pub async fn send_raw(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(text) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(text.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }
}
