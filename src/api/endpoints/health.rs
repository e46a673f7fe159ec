//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub app: &'static str,
    pub version: &'static str,
    pub uptime_secs: i64,
    pub active_sessions: usize,
}

/// `GET /api/health`: liveness plus a count of open experience sessions.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let active_sessions = ctx.memory.session_count()?;

    Ok(Json(HealthResponse {
        status: "ok",
        app: crate::config::APP_NAME,
        version: crate::config::APP_VERSION,
        uptime_secs: (Utc::now() - ctx.started_at).num_seconds(),
        active_sessions,
    }))
}
