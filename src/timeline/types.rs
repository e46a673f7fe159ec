use serde::Serialize;

use crate::models::enums::TimelineStage;

/// One expectation-setting step in a treatment timeline.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineStep {
    pub stage: TimelineStage,
    pub label: &'static str,
    pub what_changes: &'static [&'static str],
    pub what_does_not_change: &'static [&'static str],
    pub whats_normal: &'static [&'static str],
    pub whats_not_normal: &'static [&'static str],
}

/// Fixed five-step timeline for one treatment type.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineScenario {
    pub treatment_id: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub steps: [TimelineStep; 5],
}
