//! Experience memory endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::memory::ExperienceMemory;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
}

/// `POST /api/memory/session`: open a new, empty session.
pub async fn open(
    State(ctx): State<ApiContext>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let session_id = ctx.memory.open_session()?;
    Ok((StatusCode::CREATED, Json(SessionResponse { session_id })))
}

/// `GET /api/memory/:session_id`: unknown sessions read as empty.
pub async fn snapshot(
    State(ctx): State<ApiContext>,
    Path(session_id): Path<String>,
) -> Result<Json<ExperienceMemory>, ApiError> {
    Ok(Json(ctx.memory.snapshot(&session_id)?))
}

/// `POST /api/memory/:session_id/reset`: unknown sessions are not created.
pub async fn reset(
    State(ctx): State<ApiContext>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if ctx.memory.reset(&session_id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("No session '{session_id}'")))
    }
}

/// `DELETE /api/memory/:session_id`: end the session and drop its memory.
pub async fn end(
    State(ctx): State<ApiContext>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if ctx.memory.end_session(&session_id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("No session '{session_id}'")))
    }
}
