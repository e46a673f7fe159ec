//! Persona routing for "ask before booking" questions.
//!
//! Maps free text (or a structured category) to the persona whose voice
//! themes the answer. Rules are checked in order, first match wins: safety
//! terms outrank brand terms, which outrank reassurance terms. Someone who is
//! "nervous about blood thinners" must reach the safety persona.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::enums::{AskCategory, PersonaId};

/// Persona used when nothing matches.
pub const DEFAULT_PERSONA: PersonaId = PersonaId::Peppi;

/// A compiled keyword group and the persona it routes to.
struct PersonaRule {
    id: &'static str,
    regex: Regex,
    persona: PersonaId,
}

/// Ordered question rules, grouped by id. Do not reorder: every safety
/// pattern must be tried before any neurotoxin, filler or reassurance one.
static QUESTION_RULES: LazyLock<Vec<PersonaRule>> = LazyLock::new(|| {
    vec![
        // Safety: medications and conditions
        rule(
            "safety",
            r"(?i)\b(blood[\s-]?thinners?|anti[\s-]?coagulants?|warfarin|eliquis|xarelto)\b",
            PersonaId::Ryan,
        ),
        rule(
            "safety",
            r"(?i)\b(aspirin|ibuprofen|medications?|meds|accutane|isotretinoin)\b",
            PersonaId::Ryan,
        ),
        rule(
            "safety",
            r"(?i)\b(pregnan(?:t|cy)|breast[\s-]?feeding|nursing)\b",
            PersonaId::Ryan,
        ),
        rule(
            "safety",
            r"(?i)\b(allerg(?:y|ies|ic)|autoimmune|diabet\w*|heart[\s-]?condition)\b",
            PersonaId::Ryan,
        ),
        rule(
            "safety",
            r"(?i)\b(contraindicat\w*|side[\s-]?effects?|risks?|safe(?:ty)?|complications?)\b",
            PersonaId::Ryan,
        ),
        rule(
            "safety",
            r"(?i)\b(infections?|cold[\s-]?sores?|keloids?)\b",
            PersonaId::Ryan,
        ),
        // Neurotoxins: brands, then treatment areas
        rule(
            "neurotoxin",
            r"(?i)\b(botox|dysport|xeomin|jeuveau|daxxify)\b",
            PersonaId::BeauTox,
        ),
        rule(
            "neurotoxin",
            r"(?i)\b(neurotoxins?|neuromodulators?|tox|wrinkle[\s-]?relaxers?)\b",
            PersonaId::BeauTox,
        ),
        rule(
            "neurotoxin",
            r"(?i)\b(crow'?s[\s-]?feet|forehead[\s-]?lines?|frown[\s-]?lines?)\b",
            PersonaId::BeauTox,
        ),
        rule(
            "neurotoxin",
            r"(?i)\b(11s|elevens|lip[\s-]?flip)\b",
            PersonaId::BeauTox,
        ),
        // Fillers: products, then anatomy
        rule(
            "filler",
            r"(?i)\b(fillers?|juvederm|restylane|rha|sculptra|radiesse)\b",
            PersonaId::FillaGrace,
        ),
        rule(
            "filler",
            r"(?i)\b(lips?|cheeks?|jawline|chin|under[\s-]?eyes?|tear[\s-]?troughs?)\b",
            PersonaId::FillaGrace,
        ),
        rule(
            "filler",
            r"(?i)\b(nasolabial|smile[\s-]?lines|volume)\b",
            PersonaId::FillaGrace,
        ),
        // Reassurance: nerves and first visits
        rule(
            "reassurance",
            r"(?i)\b(nervous|scared|afraid|anxious|anxiety|worried|fear)\b",
            PersonaId::Peppi,
        ),
        rule(
            "reassurance",
            r"(?i)\b(first[\s-]?time|never\s+had|new\s+to|pain(?:ful)?|hurts?|needles?)\b",
            PersonaId::Peppi,
        ),
    ]
});

fn rule(id: &'static str, pattern: &str, persona: PersonaId) -> PersonaRule {
    PersonaRule {
        id,
        regex: Regex::new(pattern).expect("Invalid persona routing regex"),
        persona,
    }
}

/// Routing decision with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaRoute {
    pub persona: PersonaId,
    /// `None` when the default persona was used.
    pub matched_rule: Option<&'static str>,
}

/// Route a free-text question, reporting which rule fired.
pub fn route_question(text: &str) -> PersonaRoute {
    for r in QUESTION_RULES.iter() {
        if r.regex.is_match(text) {
            tracing::debug!(rule = r.id, persona = r.persona.as_str(), "Persona rule matched");
            return PersonaRoute {
                persona: r.persona,
                matched_rule: Some(r.id),
            };
        }
    }

    PersonaRoute {
        persona: DEFAULT_PERSONA,
        matched_rule: None,
    }
}

pub fn suggest_persona_for_question(text: &str) -> PersonaId {
    route_question(text).persona
}

pub fn persona_for_category(category: AskCategory) -> PersonaId {
    match category {
        AskCategory::Safety => PersonaId::Ryan,
        AskCategory::Injectables => PersonaId::BeauTox,
        AskCategory::Fillers => PersonaId::FillaGrace,
        AskCategory::WeightLoss => PersonaId::Vita,
        AskCategory::Hormones => PersonaId::Harmony,
        AskCategory::FirstVisit | AskCategory::Skin | AskCategory::General => DEFAULT_PERSONA,
    }
}

impl PersonaId {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Peppi => "Peppi",
            Self::Ryan => "Ryan",
            Self::BeauTox => "Beau-Tox",
            Self::FillaGrace => "Filla Grace",
            Self::Vita => "Vita",
            Self::Harmony => "Harmony",
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            Self::Peppi => "Friendly guide for first visits and general questions",
            Self::Ryan => "Safety voice for medications, conditions and contraindications",
            Self::BeauTox => "Explains how wrinkle relaxers work and what to expect",
            Self::FillaGrace => "Talks through volume, contour and filler basics",
            Self::Vita => "Covers medical weight-loss and wellness programs",
            Self::Harmony => "Covers hormone balance and therapy basics",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safety_outranks_fear_and_brand() {
        assert_eq!(
            suggest_persona_for_question("I'm nervous about taking blood thinners before Botox"),
            PersonaId::Ryan
        );
    }

    #[test]
    fn brand_outranks_anatomy_and_fear() {
        let route = route_question("First time getting Botox for my forehead, will it hurt?");
        assert_eq!(route.persona, PersonaId::BeauTox);
        assert_eq!(route.matched_rule, Some("neurotoxin"));
    }

    #[test]
    fn filler_terms_route_to_filla_grace() {
        assert_eq!(
            suggest_persona_for_question("How long do lip fillers last?"),
            PersonaId::FillaGrace
        );
        assert_eq!(
            suggest_persona_for_question("Can you fix TEAR TROUGHS?"),
            PersonaId::FillaGrace
        );
    }

    #[test]
    fn fear_terms_route_to_peppi_with_rule() {
        let route = route_question("I'm scared of needles");
        assert_eq!(route.persona, PersonaId::Peppi);
        assert_eq!(route.matched_rule, Some("reassurance"));
    }

    #[test]
    fn no_match_falls_back_to_default() {
        let route = route_question("What are your opening hours?");
        assert_eq!(route.persona, DEFAULT_PERSONA);
        assert_eq!(route.matched_rule, None);
        assert_eq!(suggest_persona_for_question(""), PersonaId::Peppi);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(suggest_persona_for_question("IS IT SAFE WHILE PREGNANT"), PersonaId::Ryan);
        assert_eq!(suggest_persona_for_question("dysport vs xeomin"), PersonaId::BeauTox);
    }

    #[test]
    fn words_inside_other_words_do_not_match() {
        // "tox" must not fire inside "detox", "lip" not inside "slippery"
        assert_eq!(suggest_persona_for_question("Do you offer a detox program"), PersonaId::Peppi);
        assert_eq!(suggest_persona_for_question("slippery floors"), PersonaId::Peppi);
    }

    #[test]
    fn categories_map_to_personas() {
        assert_eq!(persona_for_category(AskCategory::Safety), PersonaId::Ryan);
        assert_eq!(persona_for_category(AskCategory::Injectables), PersonaId::BeauTox);
        assert_eq!(persona_for_category(AskCategory::Fillers), PersonaId::FillaGrace);
        assert_eq!(persona_for_category(AskCategory::WeightLoss), PersonaId::Vita);
        assert_eq!(persona_for_category(AskCategory::Hormones), PersonaId::Harmony);
        assert_eq!(persona_for_category(AskCategory::FirstVisit), PersonaId::Peppi);
    }

    #[test]
    fn every_persona_has_metadata() {
        for p in PersonaId::ALL {
            assert!(!p.display_name().is_empty());
            assert!(!p.role().is_empty());
        }
    }

    #[test]
    fn rule_groups_are_contiguous_and_ordered() {
        let mut groups: Vec<&str> = Vec::new();
        for r in QUESTION_RULES.iter() {
            if groups.last() != Some(&r.id) {
                assert!(!groups.contains(&r.id), "rule group {} is split", r.id);
                groups.push(r.id);
            }
        }
        assert_eq!(groups, vec!["safety", "neurotoxin", "filler", "reassurance"]);
    }

    #[test]
    fn every_safety_pattern_still_routes_to_ryan() {
        for q in [
            "Is it okay on warfarin?",
            "Can I do this while breastfeeding?",
            "I have an autoimmune condition",
            "What are the side effects?",
            "I get cold sores a lot",
            "I'm on isotretinoin",
        ] {
            assert_eq!(suggest_persona_for_question(q), PersonaId::Ryan, "{q}");
        }
    }
}
