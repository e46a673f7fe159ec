//! Treatment timeline scenarios: "what to expect" from before treatment to month 3+.
//!
//! Pure lookup over a static catalog. Unknown treatment ids fall back to the
//! first scenario instead of failing.

mod catalog;
mod types;

pub use catalog::SCENARIOS;
pub use types::*;

/// All scenarios in catalog order.
pub fn timeline_scenarios() -> &'static [TimelineScenario] {
    SCENARIOS
}

pub fn find_timeline_scenario(treatment_id: &str) -> Option<&'static TimelineScenario> {
    SCENARIOS.iter().find(|s| s.treatment_id == treatment_id)
}

/// Scenario for `treatment_id`, or the first catalog entry if unknown.
pub fn get_timeline_scenario(treatment_id: &str) -> &'static TimelineScenario {
    find_timeline_scenario(treatment_id).unwrap_or_else(|| {
        tracing::debug!(treatment_id, "Unknown timeline scenario, using default");
        &SCENARIOS[0]
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::TimelineStage;

    #[test]
    fn catalog_has_four_scenarios_in_order() {
        let ids: Vec<_> = timeline_scenarios().iter().map(|s| s.treatment_id).collect();
        assert_eq!(
            ids,
            vec!["botox-dysport", "dermal-fillers", "rf-microneedling", "chemical-peel"]
        );
    }

    #[test]
    fn lookup_by_id() {
        let s = get_timeline_scenario("chemical-peel");
        assert_eq!(s.treatment_id, "chemical-peel");
        assert!(find_timeline_scenario("dermal-fillers").is_some());
    }

    #[test]
    fn unknown_id_falls_back_to_first() {
        let s = get_timeline_scenario("nonexistent-id");
        assert_eq!(s.treatment_id, SCENARIOS[0].treatment_id);
        assert!(find_timeline_scenario("nonexistent-id").is_none());
        assert_eq!(get_timeline_scenario("").treatment_id, "botox-dysport");
    }

    #[test]
    fn every_scenario_walks_the_same_five_stages() {
        let expected = TimelineStage::ALL;
        for scenario in timeline_scenarios() {
            let stages: Vec<_> = scenario.steps.iter().map(|s| s.stage).collect();
            assert_eq!(stages, expected, "{}", scenario.treatment_id);
        }
    }

    #[test]
    fn every_step_fills_all_four_lists() {
        for scenario in timeline_scenarios() {
            for step in &scenario.steps {
                assert!(!step.what_changes.is_empty());
                assert!(!step.what_does_not_change.is_empty());
                assert!(!step.whats_normal.is_empty());
                assert!(!step.whats_not_normal.is_empty());
            }
        }
    }

    #[test]
    fn scenario_serializes_steps() {
        let json = serde_json::to_value(get_timeline_scenario("rf-microneedling")).unwrap();
        assert_eq!(json["steps"].as_array().unwrap().len(), 5);
        assert_eq!(json["steps"][4]["stage"], "month-3+");
    }
}
