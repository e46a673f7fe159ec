//! `GET /api/timeline/:treatment_id`: week-by-week expectations.
//!
//! Unknown treatment ids get the first scenario rather than an error, so a
//! stale link still shows something useful.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::api::types::ApiContext;
use crate::timeline::{self, TimelineScenario};

pub async fn scenario(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
    Path(treatment_id): Path<String>,
) -> Json<&'static TimelineScenario> {
    let scenario = timeline::get_timeline_scenario(&treatment_id);

    ctx.record(&headers, |memory, session| {
        memory.track_topic(session, &format!("timeline:{}", scenario.treatment_id))
    });

    Json(scenario)
}
