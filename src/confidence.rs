//! Pre-consult confidence check.
//!
//! Scores a short intake questionnaire into a 0-10 confidence value and a
//! suggested consultation type. Never selects a treatment: the only output
//! besides the score is a consult-type label.

use serde::{Deserialize, Serialize};

use crate::models::enums::{ChangeStyle, DecisionStyle, DowntimeComfort, FirstTime, Timeframe};

pub const MAX_SCORE: u8 = 10;

/// Minimum trimmed length for `bother` to count as a clear goal.
const BOTHER_MIN_CHARS: usize = 10;

/// Answers from the confidence check form. Ephemeral, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceCheckAnswer {
    pub bother: String,
    pub change_style: ChangeStyle,
    pub first_time: FirstTime,
    pub timeframe: Timeframe,
    pub downtime_comfort: DowntimeComfort,
    pub decision_style: DecisionStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLabel {
    Low,
    Medium,
    High,
}

impl ConfidenceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Kind of in-person conversation to suggest. Not a treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsultType {
    EducationFirst,
    GoalFocused,
}

impl ConsultType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::EducationFirst => "General / education-first consultation",
            Self::GoalFocused => "Goal-focused consultation",
        }
    }
}

/// Everything the confidence check produces, bundled for the API.
#[derive(Debug, Clone, Serialize)]
pub struct ConfidenceReport {
    pub score: u8,
    pub label: ConfidenceLabel,
    pub consult_type: ConsultType,
    pub consult_label: &'static str,
    pub summary: String,
}

// ═══════════════════════════════════════════
// Scoring
// ═══════════════════════════════════════════

/// Additive score clamped to `[0, 10]`.
pub fn score_confidence(answer: &ConfidenceCheckAnswer) -> u8 {
    let mut score: i32 = 0;

    if answer.bother.trim().chars().count() >= BOTHER_MIN_CHARS {
        score += 2;
    }
    if answer.change_style != ChangeStyle::Unsure {
        score += 2;
    }
    if answer.timeframe != Timeframe::JustResearching {
        score += 2;
    }
    score += match answer.decision_style {
        DecisionStyle::IKnowWhatIWant => 3,
        DecisionStyle::IJustWantOptions => 2,
        DecisionStyle::INeedGuidance => 1,
    };
    if answer.first_time == FirstTime::Yes {
        score -= 1;
    }
    if answer.downtime_comfort == DowntimeComfort::Unsure {
        score -= 1;
    }

    score.clamp(0, MAX_SCORE as i32) as u8
}

pub fn confidence_label(score: u8) -> ConfidenceLabel {
    if score >= 8 {
        ConfidenceLabel::High
    } else if score >= 5 {
        ConfidenceLabel::Medium
    } else {
        ConfidenceLabel::Low
    }
}

pub fn suggested_consult_type(answer: &ConfidenceCheckAnswer) -> ConsultType {
    if answer.decision_style != DecisionStyle::IKnowWhatIWant
        || answer.change_style == ChangeStyle::Unsure
    {
        ConsultType::EducationFirst
    } else {
        ConsultType::GoalFocused
    }
}

// ═══════════════════════════════════════════
// Summary
// ═══════════════════════════════════════════

pub fn build_confidence_summary(answer: &ConfidenceCheckAnswer) -> String {
    let score = score_confidence(answer);
    let label = confidence_label(score);
    let consult = suggested_consult_type(answer);
    let bother = answer.bother.trim();

    let lines = [
        "Confidence check summary".to_string(),
        format!("Confidence: {score}/{MAX_SCORE} ({})", label.as_str()),
        format!("Suggested consult: {}", consult.label()),
        String::new(),
        format!(
            "What's on your mind: {}",
            if bother.is_empty() { "(not shared)" } else { bother }
        ),
        format!("Change style: {}", change_style_label(answer.change_style)),
        format!("First time: {}", first_time_label(answer.first_time)),
        format!("Timeframe: {}", timeframe_label(answer.timeframe)),
        format!("Downtime comfort: {}", downtime_label(answer.downtime_comfort)),
        format!("Decision style: {}", decision_style_label(answer.decision_style)),
        String::new(),
        "This summary is educational. It is not a diagnosis or a treatment recommendation."
            .to_string(),
    ];

    lines.join("\n")
}

pub fn build_confidence_report(answer: &ConfidenceCheckAnswer) -> ConfidenceReport {
    let score = score_confidence(answer);
    let consult_type = suggested_consult_type(answer);
    ConfidenceReport {
        score,
        label: confidence_label(score),
        consult_type,
        consult_label: consult_type.label(),
        summary: build_confidence_summary(answer),
    }
}

fn change_style_label(v: ChangeStyle) -> &'static str {
    match v {
        ChangeStyle::Subtle => "Subtle, refreshed",
        ChangeStyle::Balanced => "Balanced",
        ChangeStyle::Noticeable => "Noticeable",
        ChangeStyle::Unsure => "Not sure yet",
    }
}

fn first_time_label(v: FirstTime) -> &'static str {
    match v {
        FirstTime::Yes => "Yes",
        FirstTime::No => "No",
    }
}

fn timeframe_label(v: Timeframe) -> &'static str {
    match v {
        Timeframe::ThisMonth => "This month",
        Timeframe::NextFewMonths => "In the next few months",
        Timeframe::BeforeAnEvent => "Before an event",
        Timeframe::JustResearching => "Just researching",
    }
}

fn downtime_label(v: DowntimeComfort) -> &'static str {
    match v {
        DowntimeComfort::NoDowntime => "No downtime",
        DowntimeComfort::AFewDays => "A few days",
        DowntimeComfort::AWeekOrMore => "A week or more",
        DowntimeComfort::Unsure => "Not sure",
    }
}

fn decision_style_label(v: DecisionStyle) -> &'static str {
    match v {
        DecisionStyle::IKnowWhatIWant => "I know what I want",
        DecisionStyle::IJustWantOptions => "I just want options",
        DecisionStyle::INeedGuidance => "I need guidance",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer() -> ConfidenceCheckAnswer {
        ConfidenceCheckAnswer {
            bother: "Lines between my brows".into(),
            change_style: ChangeStyle::Subtle,
            first_time: FirstTime::No,
            timeframe: Timeframe::ThisMonth,
            downtime_comfort: DowntimeComfort::AFewDays,
            decision_style: DecisionStyle::IKnowWhatIWant,
        }
    }

    #[test]
    fn decided_returning_client_scores_nine() {
        assert_eq!(score_confidence(&answer()), 9);
        assert_eq!(confidence_label(9), ConfidenceLabel::High);
    }

    #[test]
    fn short_bother_does_not_count() {
        let a = ConfidenceCheckAnswer {
            bother: "   lines   ".into(),
            ..answer()
        };
        assert_eq!(score_confidence(&a), 7);
    }

    #[test]
    fn deductions_apply() {
        let a = ConfidenceCheckAnswer {
            first_time: FirstTime::Yes,
            downtime_comfort: DowntimeComfort::Unsure,
            ..answer()
        };
        assert_eq!(score_confidence(&a), 7);
    }

    #[test]
    fn lowest_answers_clamp_to_zero() {
        let a = ConfidenceCheckAnswer {
            bother: String::new(),
            change_style: ChangeStyle::Unsure,
            first_time: FirstTime::Yes,
            timeframe: Timeframe::JustResearching,
            downtime_comfort: DowntimeComfort::Unsure,
            decision_style: DecisionStyle::INeedGuidance,
        };
        assert_eq!(score_confidence(&a), 0);
    }

    #[test]
    fn score_stays_in_bounds_for_all_answers() {
        for bother in ["", "a long enough description"] {
            for &change_style in ChangeStyle::ALL {
                for &first_time in FirstTime::ALL {
                    for &timeframe in Timeframe::ALL {
                        for &downtime_comfort in DowntimeComfort::ALL {
                            for &decision_style in DecisionStyle::ALL {
                                let a = ConfidenceCheckAnswer {
                                    bother: bother.into(),
                                    change_style,
                                    first_time,
                                    timeframe,
                                    downtime_comfort,
                                    decision_style,
                                };
                                assert!(score_confidence(&a) <= MAX_SCORE);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn label_thresholds() {
        assert_eq!(confidence_label(10).as_str(), "High");
        assert_eq!(confidence_label(8).as_str(), "High");
        assert_eq!(confidence_label(7).as_str(), "Medium");
        assert_eq!(confidence_label(5).as_str(), "Medium");
        assert_eq!(confidence_label(4).as_str(), "Low");
        assert_eq!(confidence_label(0).as_str(), "Low");
    }

    #[test]
    fn goal_focused_only_when_decided_and_sure() {
        assert_eq!(suggested_consult_type(&answer()), ConsultType::GoalFocused);

        let unsure = ConfidenceCheckAnswer {
            change_style: ChangeStyle::Unsure,
            ..answer()
        };
        assert_eq!(suggested_consult_type(&unsure), ConsultType::EducationFirst);

        let options = ConfidenceCheckAnswer {
            decision_style: DecisionStyle::IJustWantOptions,
            ..answer()
        };
        assert_eq!(suggested_consult_type(&options), ConsultType::EducationFirst);
    }

    #[test]
    fn consult_labels_never_name_a_treatment() {
        let banned = [
            "botox", "dysport", "filler", "peel", "microneedling", "laser", "semaglutide",
            "hormone", "iv ",
        ];
        for consult in [ConsultType::EducationFirst, ConsultType::GoalFocused] {
            let label = consult.label().to_lowercase();
            for word in banned {
                assert!(!label.contains(word), "{label} mentions {word}");
            }
        }
    }

    #[test]
    fn summary_has_fixed_layout() {
        let summary = build_confidence_summary(&answer());
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], "Confidence check summary");
        assert_eq!(lines[1], "Confidence: 9/10 (High)");
        assert_eq!(lines[2], "Suggested consult: Goal-focused consultation");
        assert_eq!(lines[4], "What's on your mind: Lines between my brows");
        assert!(lines.last().unwrap().contains("not a diagnosis"));
    }

    #[test]
    fn summary_marks_missing_bother() {
        let a = ConfidenceCheckAnswer {
            bother: "  ".into(),
            ..answer()
        };
        assert!(build_confidence_summary(&a).contains("What's on your mind: (not shared)"));
    }

    #[test]
    fn answer_deserializes_from_form_json() {
        let json = r#"{
            "bother": "Tired-looking under eyes",
            "changeStyle": "balanced",
            "firstTime": "yes",
            "timeframe": "before-an-event",
            "downtimeComfort": "none",
            "decisionStyle": "i-need-guidance"
        }"#;
        let a: ConfidenceCheckAnswer = serde_json::from_str(json).unwrap();
        assert_eq!(a.downtime_comfort, DowntimeComfort::NoDowntime);
        // 2 + 2 + 2 + 1 - 1 = 6
        assert_eq!(score_confidence(&a), 6);
        assert_eq!(build_confidence_report(&a).label, ConfidenceLabel::Medium);
    }
}
