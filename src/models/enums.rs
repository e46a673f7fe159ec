use serde::{Deserialize, Serialize};

use crate::error::CareError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
///
/// The string literal is the wire id: it is what `as_str`, `Display`,
/// `FromStr` and serde all agree on. Declaration order is the `Ord` order
/// and the order of `ALL`.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CareError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(CareError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

// ═══════════════════════════════════════════
// Triage keys
// ═══════════════════════════════════════════

str_enum!(
    /// Treatment a visitor had. Classification key only.
    Treatment {
        BotoxDysport => "botox-dysport",
        DermalFillers => "dermal-fillers",
        RfMicroneedling => "rf-microneedling",
        ChemicalPeel => "chemical-peel",
        IvTherapy => "iv-therapy",
        Other => "other",
    }
);

str_enum!(
    /// Treatment families that share aftercare expectations.
    TreatmentGroup {
        Neurotoxin => "neurotoxin",
        Filler => "filler",
        General => "general",
    }
);

str_enum!(Symptom {
    Redness => "redness",
    Swelling => "swelling",
    Bruising => "bruising",
    Tenderness => "tenderness",
    Itching => "itching",
    Lumps => "lumps",
    Asymmetry => "asymmetry",
    Fever => "fever",
    WorseningPain => "worsening-pain",
    VisionChanges => "vision-changes",
    SkinBlanchingDusky => "skin-blanching-dusky",
    TroubleBreathing => "trouble-breathing",
    Hives => "hives",
});

str_enum!(
    /// When the symptom started, relative to the treatment. Later is more cautious.
    TimelineBucket {
        SameDay => "same-day",
        Day1 => "day-1",
        Day2To3 => "day-2-3",
        Week1To2 => "week-1-2",
        Week3Plus => "week-3+",
    }
);

impl Treatment {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BotoxDysport => "Botox / Dysport",
            Self::DermalFillers => "dermal fillers",
            Self::RfMicroneedling => "RF microneedling",
            Self::ChemicalPeel => "a chemical peel",
            Self::IvTherapy => "IV therapy",
            Self::Other => "your treatment",
        }
    }

    pub fn group(&self) -> TreatmentGroup {
        match self {
            Self::BotoxDysport => TreatmentGroup::Neurotoxin,
            Self::DermalFillers => TreatmentGroup::Filler,
            Self::RfMicroneedling | Self::ChemicalPeel | Self::IvTherapy | Self::Other => {
                TreatmentGroup::General
            }
        }
    }

    pub fn is_filler(&self) -> bool {
        self.group() == TreatmentGroup::Filler
    }
}

impl Symptom {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Redness => "Redness",
            Self::Swelling => "Swelling",
            Self::Bruising => "Bruising",
            Self::Tenderness => "Tenderness",
            Self::Itching => "Itching",
            Self::Lumps => "Lumps or bumps",
            Self::Asymmetry => "Asymmetry",
            Self::Fever => "Fever",
            Self::WorseningPain => "Worsening pain",
            Self::VisionChanges => "Vision changes",
            Self::SkinBlanchingDusky => "Pale, blanched or dusky skin",
            Self::TroubleBreathing => "Trouble breathing",
            Self::Hives => "Hives",
        }
    }
}

impl TimelineBucket {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SameDay => "the same day",
            Self::Day1 => "day 1",
            Self::Day2To3 => "days 2-3",
            Self::Week1To2 => "weeks 1-2",
            Self::Week3Plus => "week 3 or later",
        }
    }
}

// ═══════════════════════════════════════════
// Confidence check answers
// ═══════════════════════════════════════════

str_enum!(ChangeStyle {
    Subtle => "subtle",
    Balanced => "balanced",
    Noticeable => "noticeable",
    Unsure => "unsure",
});

str_enum!(FirstTime {
    Yes => "yes",
    No => "no",
});

str_enum!(Timeframe {
    ThisMonth => "this-month",
    NextFewMonths => "next-few-months",
    BeforeAnEvent => "before-an-event",
    JustResearching => "just-researching",
});

str_enum!(DowntimeComfort {
    NoDowntime => "none",
    AFewDays => "a-few-days",
    AWeekOrMore => "a-week-or-more",
    Unsure => "unsure",
});

str_enum!(DecisionStyle {
    IKnowWhatIWant => "i-know-what-i-want",
    IJustWantOptions => "i-just-want-options",
    INeedGuidance => "i-need-guidance",
});

// ═══════════════════════════════════════════
// Personas and routing
// ═══════════════════════════════════════════

str_enum!(
    /// Themed response voice. A routing target, never a recommendation.
    PersonaId {
        Peppi => "peppi",
        Ryan => "ryan",
        BeauTox => "beau-tox",
        FillaGrace => "filla-grace",
        Vita => "vita",
        Harmony => "harmony",
    }
);

str_enum!(
    /// Structured "ask before booking" categories.
    AskCategory {
        Safety => "safety",
        Injectables => "injectables",
        Fillers => "fillers",
        FirstVisit => "first-visit",
        Skin => "skin",
        WeightLoss => "weight-loss",
        Hormones => "hormones",
        General => "general",
    }
);

// ═══════════════════════════════════════════
// Catalog annotations
// ═══════════════════════════════════════════

str_enum!(PathwayStage {
    StartHere => "start-here",
    Maintain => "maintain",
    Support => "support",
});

impl PathwayStage {
    pub fn label(&self) -> &'static str {
        match self {
            Self::StartHere => "Start here",
            Self::Maintain => "Maintain",
            Self::Support => "Support",
        }
    }
}

str_enum!(TimelineStage {
    Before => "before",
    Day1 => "day-1",
    Day3 => "day-3",
    Week2 => "week-2",
    Month3Plus => "month-3+",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn treatment_round_trip() {
        for (variant, s) in [
            (Treatment::BotoxDysport, "botox-dysport"),
            (Treatment::DermalFillers, "dermal-fillers"),
            (Treatment::RfMicroneedling, "rf-microneedling"),
            (Treatment::ChemicalPeel, "chemical-peel"),
            (Treatment::IvTherapy, "iv-therapy"),
            (Treatment::Other, "other"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Treatment::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn timeline_bucket_order_is_lateness() {
        assert!(TimelineBucket::SameDay < TimelineBucket::Day1);
        assert!(TimelineBucket::Day2To3 < TimelineBucket::Week1To2);
        assert!(TimelineBucket::Week1To2 < TimelineBucket::Week3Plus);
        assert_eq!(TimelineBucket::ALL.last(), Some(&TimelineBucket::Week3Plus));
    }

    #[test]
    fn serde_uses_wire_ids() {
        let json = serde_json::to_string(&Symptom::SkinBlanchingDusky).unwrap();
        assert_eq!(json, "\"skin-blanching-dusky\"");

        let bucket: TimelineBucket = serde_json::from_str("\"week-3+\"").unwrap();
        assert_eq!(bucket, TimelineBucket::Week3Plus);

        let comfort: DowntimeComfort = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(comfort, DowntimeComfort::NoDowntime);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(PersonaId::BeauTox.to_string(), "beau-tox");
        assert_eq!(DecisionStyle::IKnowWhatIWant.to_string(), "i-know-what-i-want");
    }

    #[test]
    fn treatment_groups() {
        assert_eq!(Treatment::BotoxDysport.group(), TreatmentGroup::Neurotoxin);
        assert_eq!(Treatment::DermalFillers.group(), TreatmentGroup::Filler);
        assert_eq!(Treatment::ChemicalPeel.group(), TreatmentGroup::General);
        assert!(Treatment::DermalFillers.is_filler());
        assert!(!Treatment::IvTherapy.is_filler());
    }

    #[test]
    fn pathway_stage_labels() {
        let labels: Vec<_> = PathwayStage::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Start here", "Maintain", "Support"]);
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(Treatment::from_str("laser-tattoo").is_err());
        assert!(Symptom::from_str("Redness").is_err());
        assert!(TimelineBucket::from_str("").is_err());

        let err = PersonaId::from_str("clippy").unwrap_err();
        assert!(matches!(
            err,
            CareError::InvalidEnum { ref field, ref value }
                if field == "PersonaId" && value == "clippy"
        ));
    }
}
