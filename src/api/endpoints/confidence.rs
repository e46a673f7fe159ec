//! `POST /api/confidence`: score the pre-consult confidence check.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::api::types::ApiContext;
use crate::confidence::{self, ConfidenceCheckAnswer, ConfidenceReport};
use crate::memory::CoarsePreferences;

/// Only the coarse downtime/decision preferences reach experience memory;
/// the free-text `bother` answer is never stored.
pub async fn check(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
    Json(answer): Json<ConfidenceCheckAnswer>,
) -> Json<ConfidenceReport> {
    let report = confidence::build_confidence_report(&answer);

    ctx.record(&headers, |memory, session| {
        memory.set_preferences(
            session,
            CoarsePreferences {
                downtime_comfort: Some(answer.downtime_comfort),
                decision_style: Some(answer.decision_style),
            },
        )
    });

    Json(report)
}
