//! Beauty roadmap endpoints.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::roadmap::{self, BeautyPriority, BEAUTY_PRIORITIES};

/// `GET /api/roadmap/priorities`: selectable focus areas.
pub async fn priorities() -> Json<&'static [BeautyPriority]> {
    Json(BEAUTY_PRIORITIES)
}

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub priorities: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub text: String,
}

/// `POST /api/roadmap`: render the plain-text roadmap. Nothing is stored.
pub async fn build(Json(req): Json<RoadmapRequest>) -> Json<RoadmapResponse> {
    Json(RoadmapResponse {
        text: roadmap::build_beauty_roadmap(req.priorities.as_slice(), req.notes.as_deref()),
    })
}
