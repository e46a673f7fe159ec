//! `POST /api/triage/normal-check`: "is this normal?" aftercare check.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::enums::{Symptom, TimelineBucket, Treatment};
use crate::triage::{self, NormalCheckResult};

#[derive(Debug, Deserialize)]
pub struct NormalCheckRequest {
    pub treatment: Treatment,
    pub symptom: Symptom,
    pub timeline: TimelineBucket,
}

#[derive(Debug, Serialize)]
pub struct NormalCheckResponse {
    #[serde(flatten)]
    pub result: NormalCheckResult,
    /// Plain-text rendering for copy/share.
    pub text: String,
}

pub async fn normal_check(Json(req): Json<NormalCheckRequest>) -> Json<NormalCheckResponse> {
    let result = triage::classify(req.treatment, req.symptom, req.timeline);
    let text = triage::classify_text(&result);
    Json(NormalCheckResponse { result, text })
}
