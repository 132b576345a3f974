//! Liveness probe backed by a `SELECT 1` against the pool.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub server_time: String,
}

pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let server_time = Utc::now().to_rfc3339();

    if state.db.health_check().await {
        return (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                database: "connected".to_string(),
                server_time,
            }),
        );
    }

    warn!("Health check failed: database unreachable");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(HealthResponse {
            status: "unavailable".to_string(),
            database: "disconnected".to_string(),
            server_time,
        }),
    )
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{send, test_app_with_db};
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn test_health_ok() {
        let (app, _db) = test_app_with_db().await;

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_health_after_pool_closed() {
        let (app, db) = test_app_with_db().await;
        db.close().await;

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["database"], "disconnected");
    }
}
