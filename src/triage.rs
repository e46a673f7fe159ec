//! "Is this normal?" aftercare check.
//!
//! Classifies a (treatment, symptom, timeline) triple into a severity tier
//! with guidance text. Total over its input domain: every combination gets
//! an answer, nobody is left without guidance.
//!
//! Precedence is strict and evaluated top to bottom:
//! 1. red-flag symptoms (always, regardless of treatment or timeline)
//! 2. common symptoms (timeline decides normal vs caution)
//! 3. lumps / asymmetry
//! 4. itching
//! 5. fallback caution

use serde::{Deserialize, Serialize};

use crate::models::enums::{Symptom, TimelineBucket, Treatment, TreatmentGroup};

// ═══════════════════════════════════════════
// Symptom tables
// ═══════════════════════════════════════════

/// Always short-circuit to urgent-care guidance.
pub const RED_FLAG_SYMPTOMS: &[Symptom] = &[
    Symptom::Fever,
    Symptom::WorseningPain,
    Symptom::VisionChanges,
    Symptom::SkinBlanchingDusky,
    Symptom::TroubleBreathing,
    Symptom::Hives,
];

/// Expected healing responses.
pub const COMMON_SYMPTOMS: &[Symptom] = &[
    Symptom::Redness,
    Symptom::Swelling,
    Symptom::Bruising,
    Symptom::Tenderness,
];

/// Neither red-flag nor clearly expected; timeline decides.
pub const AMBIGUOUS_SYMPTOMS: &[Symptom] = &[Symptom::Itching, Symptom::Lumps, Symptom::Asymmetry];

const RED_FLAG_STEPS: &[&str] = &[
    "If symptoms are severe or getting worse, seek urgent care or call emergency services.",
    "Contact the clinic so a provider can review what you are experiencing.",
    "Avoid treating this yourself (no massaging, heat or over-the-counter remedies) \
     until you have been assessed.",
];

const NORMAL_STEPS: &[&str] = &[
    "Keep following your aftercare instructions.",
    "Notice how it changes over the next day or two.",
    "Contact the clinic if it worsens, spreads or you feel unsure.",
];

const CAUTION_STEPS: &[&str] = &[
    "Contact the clinic and let them know how long this has lasted.",
    "Take a clear photo in good light in case the clinic asks for one.",
    "Seek urgent care if it becomes very painful, hot or rapidly worse.",
];

// ═══════════════════════════════════════════
// Result types
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Normal,
    Caution,
    RedFlag,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Caution => "caution",
            Self::RedFlag => "red-flag",
        }
    }
}

/// Text carried by every severity tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDetail {
    pub title: String,
    pub guidance: String,
    pub next_steps: Vec<String>,
}

/// Outcome of a normal check. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "severity", rename_all = "kebab-case")]
pub enum NormalCheckResult {
    Normal(CheckDetail),
    Caution(CheckDetail),
    RedFlag(CheckDetail),
}

impl NormalCheckResult {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Normal(_) => Severity::Normal,
            Self::Caution(_) => Severity::Caution,
            Self::RedFlag(_) => Severity::RedFlag,
        }
    }

    pub fn detail(&self) -> &CheckDetail {
        match self {
            Self::Normal(d) | Self::Caution(d) | Self::RedFlag(d) => d,
        }
    }
}

// ═══════════════════════════════════════════
// Classification
// ═══════════════════════════════════════════

pub fn is_red_flag(symptom: Symptom) -> bool {
    RED_FLAG_SYMPTOMS.contains(&symptom)
}

pub fn is_common(symptom: Symptom) -> bool {
    COMMON_SYMPTOMS.contains(&symptom)
}

/// Classify a post-treatment symptom.
///
/// The red-flag check runs first, before anything that looks at treatment or
/// timeline.
pub fn classify(
    treatment: Treatment,
    symptom: Symptom,
    timeline: TimelineBucket,
) -> NormalCheckResult {
    if is_red_flag(symptom) {
        tracing::warn!(
            symptom = symptom.as_str(),
            timeline = timeline.as_str(),
            "Red-flag symptom reported, returning urgent-care guidance"
        );
        return NormalCheckResult::RedFlag(detail(
            "Please get this checked promptly",
            format!(
                "{} can be a sign of a complication that needs to be assessed quickly by a \
                 medical professional. Please don't wait to see if it settles on its own.",
                symptom.label()
            ),
            RED_FLAG_STEPS,
        ));
    }

    let late = timeline == TimelineBucket::Week3Plus;

    let result = if is_common(symptom) {
        let window = typical_window(treatment);
        let lingering = late && matches!(symptom, Symptom::Swelling | Symptom::Redness);
        if lingering {
            NormalCheckResult::Caution(detail(
                "Worth a check-in",
                format!(
                    "{} that is still present at {} is longer than the usual healing window. {} \
                     Please check in with the clinic so a provider can take a look.",
                    symptom.label(),
                    timeline.label(),
                    window
                ),
                CAUTION_STEPS,
            ))
        } else {
            NormalCheckResult::Normal(detail(
                "This is commonly expected",
                format!(
                    "{} can be a normal part of healing after {}. {}",
                    symptom.label(),
                    treatment.label(),
                    window
                ),
                NORMAL_STEPS,
            ))
        }
    } else if matches!(symptom, Symptom::Lumps | Symptom::Asymmetry) {
        let context = if treatment.is_filler() {
            "Small lumps or some unevenness can happen while filler settles and swelling goes \
             down. Most of this softens over about two weeks."
        } else {
            "Some unevenness can show up while results develop. Neurotoxin results can take up \
             to two weeks to fully appear, and skin treatments often even out as healing finishes."
        };
        if late {
            NormalCheckResult::Caution(detail(
                "Worth a check-in",
                format!(
                    "{} that persists at {} is worth a provider's review. {}",
                    symptom.label(),
                    timeline.label(),
                    context
                ),
                CAUTION_STEPS,
            ))
        } else {
            NormalCheckResult::Normal(detail(
                "Often part of settling in",
                context.to_string(),
                NORMAL_STEPS,
            ))
        }
    } else if symptom == Symptom::Itching {
        if late {
            NormalCheckResult::Caution(detail(
                "Worth a check-in",
                format!(
                    "Itching that continues at {} should be reviewed by the clinic, especially \
                     if it comes with a rash or spreads.",
                    timeline.label()
                ),
                CAUTION_STEPS,
            ))
        } else {
            NormalCheckResult::Normal(detail(
                "Often part of healing",
                "Mild itching can be part of the skin healing process, especially after \
                 resurfacing treatments. Try not to scratch and keep the area clean."
                    .to_string(),
                NORMAL_STEPS,
            ))
        }
    } else {
        // Reached only by symptoms added without a rule above.
        NormalCheckResult::Caution(detail(
            "Let's have someone take a look",
            "We don't have specific guidance for this symptom. Please contact the clinic so a \
             provider can help."
                .to_string(),
            CAUTION_STEPS,
        ))
    };

    tracing::debug!(
        treatment = treatment.as_str(),
        symptom = symptom.as_str(),
        timeline = timeline.as_str(),
        severity = result.severity().as_str(),
        "Normal check classified"
    );

    result
}

/// Render a result as plain text for non-JSON consumers.
pub fn classify_text(result: &NormalCheckResult) -> String {
    let d = result.detail();
    let mut out = format!("{}\n\n{}\n\nNext steps:\n", d.title, d.guidance);
    for (i, step) in d.next_steps.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, step));
    }
    out
}

fn typical_window(treatment: Treatment) -> &'static str {
    match treatment.group() {
        TreatmentGroup::Neurotoxin => {
            "After Botox / Dysport, mild redness, small bumps or tenderness at injection points \
             usually settle within a few hours, and any bruising typically fades within a week."
        }
        TreatmentGroup::Filler => {
            "After filler, swelling, tenderness and bruising commonly peak in the first 24-72 \
             hours and usually settle over one to two weeks."
        }
        TreatmentGroup::General => {
            "After skin and wellness treatments, redness, swelling and tenderness are most common \
             in the first one to three days and usually ease within a week."
        }
    }
}

fn detail(title: &str, guidance: String, steps: &[&str]) -> CheckDetail {
    CheckDetail {
        title: title.to_string(),
        guidance,
        next_steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}
