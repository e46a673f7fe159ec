use crate::models::enums::TimelineStage;

use super::types::{TimelineScenario, TimelineStep};

/// Scenario catalog. The first entry is the fallback for unknown ids.
pub static SCENARIOS: &[TimelineScenario] = &[
    TimelineScenario {
        treatment_id: "botox-dysport",
        title: "Botox / Dysport",
        intro: "Wrinkle relaxers work gradually. \
                Most of the change happens in the first two weeks.",
        steps: [
            TimelineStep {
                stage: TimelineStage::Before,
                label: "Before",
                what_changes: &["Nothing yet. This is your baseline, so photos help."],
                what_does_not_change: &["Static lines that are visible at rest."],
                whats_normal: &["Feeling curious or a little nervous."],
                whats_not_normal: &[
                    "Booking while you have an active skin infection near the area.",
                ],
            },
            TimelineStep {
                stage: TimelineStage::Day1,
                label: "Day 1",
                what_changes: &["Very little. Small bumps at injection points fade within hours."],
                what_does_not_change: &["Your expressions. The product has not taken effect yet."],
                whats_normal: &["Tiny pinpoint redness.", "A mild headache."],
                whats_not_normal: &["Drooping eyelid or brow.", "Trouble breathing or swallowing."],
            },
            TimelineStep {
                stage: TimelineStage::Day3,
                label: "Day 3",
                what_changes: &["Movement starts to soften in treated muscles."],
                what_does_not_change: &["Full results. Some areas respond more slowly."],
                whats_normal: &["Uneven softening while the product settles.", "Small bruises."],
                whats_not_normal: &["Spreading rash or hives.", "Vision changes."],
            },
            TimelineStep {
                stage: TimelineStage::Week2,
                label: "Week 2",
                what_changes: &["Results are close to their peak.", "Dynamic lines look smoother."],
                what_does_not_change: &["Deep etched lines may still show at rest."],
                whats_normal: &["A follow-up visit to review balance."],
                whats_not_normal: &["Persistent asymmetry that is getting worse."],
            },
            TimelineStep {
                stage: TimelineStage::Month3Plus,
                label: "Month 3+",
                what_changes: &["Movement gradually returns as the effect wears off."],
                what_does_not_change: &["Skin quality. Wrinkle relaxers do not resurface skin."],
                whats_normal: &["Planning a maintenance visit."],
                whats_not_normal: &["New weakness in untreated areas."],
            },
        ],
    },
    TimelineScenario {
        treatment_id: "dermal-fillers",
        title: "Dermal fillers",
        intro: "Filler shows immediately, then settles as swelling goes down over about two weeks.",
        steps: [
            TimelineStep {
                stage: TimelineStage::Before,
                label: "Before",
                what_changes: &["Nothing yet. Discuss proportion and goals at your consult."],
                what_does_not_change: &["Skin texture and fine surface lines."],
                whats_normal: &["Pausing some supplements if your provider asks you to."],
                whats_not_normal: &["Treating over an active cold sore."],
            },
            TimelineStep {
                stage: TimelineStage::Day1,
                label: "Day 1",
                what_changes: &["Visible volume, often exaggerated by swelling."],
                what_does_not_change: &["The final shape. Swelling hides it for now."],
                whats_normal: &["Swelling, tenderness and bruising.", "Firmness to the touch."],
                whats_not_normal: &[
                    "Pale, blanched or dusky skin.",
                    "Severe or worsening pain.",
                    "Vision changes.",
                ],
            },
            TimelineStep {
                stage: TimelineStage::Day3,
                label: "Day 3",
                what_changes: &["Swelling is usually at or past its peak."],
                what_does_not_change: &[
                    "Small lumps may still be present while filler integrates.",
                ],
                whats_normal: &[
                    "Bruising turning yellow or green.",
                    "Mild asymmetry from swelling.",
                ],
                whats_not_normal: &["Increasing redness, heat or fever."],
            },
            TimelineStep {
                stage: TimelineStage::Week2,
                label: "Week 2",
                what_changes: &["The result has settled and feels softer."],
                what_does_not_change: &["Skin quality and pigmentation."],
                whats_normal: &["A review visit to check balance."],
                whats_not_normal: &["New hard or painful lumps."],
            },
            TimelineStep {
                stage: TimelineStage::Month3Plus,
                label: "Month 3+",
                what_changes: &["The filler has fully integrated."],
                what_does_not_change: &["Results last many months depending on product and area."],
                whats_normal: &["Gradual softening over time."],
                whats_not_normal: &["Late swelling, redness or lumps appearing without cause."],
            },
        ],
    },
    TimelineScenario {
        treatment_id: "rf-microneedling",
        title: "RF microneedling",
        intro: "Collagen remodeling is slow. Skin looks pink first and improves over months.",
        steps: [
            TimelineStep {
                stage: TimelineStage::Before,
                label: "Before",
                what_changes: &["Nothing yet. Your provider may prep your skin for a few weeks."],
                what_does_not_change: &["Volume loss. Microneedling does not add volume."],
                whats_normal: &["Stopping retinoids a few days before, if advised."],
                whats_not_normal: &["Active breakouts or infection in the area."],
            },
            TimelineStep {
                stage: TimelineStage::Day1,
                label: "Day 1",
                what_changes: &["Skin looks pink to red, like a sunburn."],
                what_does_not_change: &["Texture. Remodeling has not started yet."],
                whats_normal: &["Redness, warmth and mild swelling.", "Tiny grid marks."],
                whats_not_normal: &["Blistering or oozing.", "Fever."],
            },
            TimelineStep {
                stage: TimelineStage::Day3,
                label: "Day 3",
                what_changes: &["Redness fades and skin may feel dry or rough."],
                what_does_not_change: &["Scars and pores. Change takes weeks."],
                whats_normal: &["Light flaking.", "Mild itching."],
                whats_not_normal: &["Increasing pain or pus."],
            },
            TimelineStep {
                stage: TimelineStage::Week2,
                label: "Week 2",
                what_changes: &["Skin looks fresher and more even."],
                what_does_not_change: &["Deeper scarring. Most plans use a series of sessions."],
                whats_normal: &["Returning to your usual skincare."],
                whats_not_normal: &["Dark patches appearing in treated areas."],
            },
            TimelineStep {
                stage: TimelineStage::Month3Plus,
                label: "Month 3+",
                what_changes: &["Firmer, smoother texture as collagen builds."],
                what_does_not_change: &["Skin aging continues. Sun protection still matters."],
                whats_normal: &["Seeing the best results after a full series."],
                whats_not_normal: &["Raised or thickened scarring."],
            },
        ],
    },
    TimelineScenario {
        treatment_id: "chemical-peel",
        title: "Chemical peel",
        intro: "Peels renew the surface layer. \
                Expect a few days of peeling before skin looks brighter.",
        steps: [
            TimelineStep {
                stage: TimelineStage::Before,
                label: "Before",
                what_changes: &["Nothing yet. Your skin may be prepped with home care."],
                what_does_not_change: &["Deep wrinkles and volume loss."],
                whats_normal: &["Avoiding waxing and strong actives beforehand."],
                whats_not_normal: &["Recent sunburn on the treatment area."],
            },
            TimelineStep {
                stage: TimelineStage::Day1,
                label: "Day 1",
                what_changes: &["Skin feels tight and may look slightly shiny or pink."],
                what_does_not_change: &["Pigment. It often looks darker before it lifts."],
                whats_normal: &["Tightness and mild redness."],
                whats_not_normal: &["Blisters or raw, weeping skin."],
            },
            TimelineStep {
                stage: TimelineStage::Day3,
                label: "Day 3",
                what_changes: &["Peeling usually starts around the mouth and nose."],
                what_does_not_change: &["Final brightness. Let flakes shed on their own."],
                whats_normal: &["Flaking.", "Mild itching."],
                whats_not_normal: &["Hives or a spreading rash.", "Fever."],
            },
            TimelineStep {
                stage: TimelineStage::Week2,
                label: "Week 2",
                what_changes: &["Fresh, smoother and brighter skin."],
                what_does_not_change: &["Deeper pigment may need more sessions."],
                whats_normal: &["Skin being more sun sensitive."],
                whats_not_normal: &["New dark or light patches."],
            },
            TimelineStep {
                stage: TimelineStage::Month3Plus,
                label: "Month 3+",
                what_changes: &["Tone and texture hold with good sun protection."],
                what_does_not_change: &["Skin keeps renewing. Results fade without upkeep."],
                whats_normal: &["Planning a maintenance peel."],
                whats_not_normal: &["Lasting redness months later."],
            },
        ],
    },
];
