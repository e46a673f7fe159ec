//! Service atlas: static catalog of services, clusters, discovery options
//! and care pathways.
//!
//! All accessors are pure lookups over compile-time tables and never fail:
//! unknown ids return `None` or an empty list. Service cards are rebuilt on
//! each access; the only derived field is `default_persona`, which always
//! follows the slug rules below.

mod catalog;
mod types;

use std::sync::LazyLock;

use regex::Regex;

use crate::models::enums::PersonaId;
use crate::persona::DEFAULT_PERSONA;

pub use catalog::{CARE_PATHWAYS, CLUSTERS, DISCOVERY_OPTIONS, SERVICES};
pub use types::*;

// ═══════════════════════════════════════════
// Slug → persona
// ═══════════════════════════════════════════

/// A compiled slug pattern and the persona it routes to.
struct SlugRule {
    id: &'static str,
    regex: Regex,
    persona: PersonaId,
}

/// Ordered slug rules, grouped by id, first match wins:
/// injectable, filler, weight-loss, hormone.
static SLUG_PERSONA_RULES: LazyLock<Vec<SlugRule>> = LazyLock::new(|| {
    vec![
        slug_rule(
            "injectable",
            r"(?i)\b(botox|dysport|xeomin|jeuveau|daxxify)\b",
            PersonaId::BeauTox,
        ),
        slug_rule(
            "injectable",
            r"(?i)\b(neurotoxins?|neuromodulators?|tox|wrinkle-relaxers?)\b",
            PersonaId::BeauTox,
        ),
        slug_rule(
            "filler",
            r"(?i)\b(fillers?|sculptra|radiesse)\b",
            PersonaId::FillaGrace,
        ),
        slug_rule(
            "filler",
            r"(?i)\b(lips?|cheeks?|jawline|chin|under-eye|tear-troughs?)\b",
            PersonaId::FillaGrace,
        ),
        slug_rule(
            "weight-loss",
            r"(?i)\b(weight|weight-loss|body-contouring)\b",
            PersonaId::Vita,
        ),
        slug_rule(
            "weight-loss",
            r"(?i)\b(semaglutide|tirzepatide|glp-?1)\b",
            PersonaId::Vita,
        ),
        slug_rule(
            "hormone",
            r"(?i)\b(hormones?|hrt|bhrt|testosterone|estrogen|menopause)\b",
            PersonaId::Harmony,
        ),
    ]
});

fn slug_rule(id: &'static str, pattern: &str, persona: PersonaId) -> SlugRule {
    SlugRule {
        id,
        regex: Regex::new(pattern).expect("Invalid slug persona regex"),
        persona,
    }
}

pub fn persona_for_service_slug(slug: &str) -> PersonaId {
    SLUG_PERSONA_RULES
        .iter()
        .find(|r| r.regex.is_match(slug))
        .map(|r| {
            tracing::trace!(rule = r.id, slug, "Slug persona rule matched");
            r.persona
        })
        .unwrap_or(DEFAULT_PERSONA)
}

fn card(entry: &ServiceEntry) -> ServiceAtlasCard {
    ServiceAtlasCard {
        slug: entry.slug,
        name: entry.name,
        summary: entry.summary,
        downtime: entry.downtime,
        default_persona: persona_for_service_slug(entry.slug),
    }
}

// ═══════════════════════════════════════════
// Services and clusters
// ═══════════════════════════════════════════

pub fn all_clusters() -> &'static [ServiceAtlasCluster] {
    CLUSTERS
}

pub fn all_service_cards() -> Vec<ServiceAtlasCard> {
    SERVICES.iter().map(card).collect()
}

pub fn get_cluster(id: &str) -> Option<&'static ServiceAtlasCluster> {
    CLUSTERS.iter().find(|c| c.id == id)
}

pub fn get_service_card(slug: &str) -> Option<ServiceAtlasCard> {
    SERVICES.iter().find(|s| s.slug == slug).map(card)
}

/// Cards for a cluster in membership order. Empty for unknown clusters.
pub fn services_for_cluster(cluster_id: &str) -> Vec<ServiceAtlasCard> {
    let Some(cluster) = get_cluster(cluster_id) else {
        return Vec::new();
    };
    cluster
        .service_slugs
        .iter()
        .filter_map(|slug| get_service_card(slug))
        .collect()
}

/// First cluster whose membership contains `slug`.
pub fn cluster_for_service_slug(slug: &str) -> Option<&'static ServiceAtlasCluster> {
    CLUSTERS.iter().find(|c| c.service_slugs.contains(&slug))
}

// ═══════════════════════════════════════════
// Discovery and pathways
// ═══════════════════════════════════════════

pub fn discovery_options() -> &'static [DiscoveryOption] {
    DISCOVERY_OPTIONS
}

pub fn get_discovery_option(id: &str) -> Option<&'static DiscoveryOption> {
    DISCOVERY_OPTIONS.iter().find(|d| d.id == id)
}

pub fn clusters_for_discovery(id: &str) -> Vec<&'static ServiceAtlasCluster> {
    get_discovery_option(id)
        .map(|d| d.cluster_ids.iter().filter_map(|c| get_cluster(c)).collect())
        .unwrap_or_default()
}

pub fn care_pathways() -> &'static [CarePathway] {
    CARE_PATHWAYS
}

pub fn get_pathway(id: &str) -> Option<&'static CarePathway> {
    CARE_PATHWAYS.iter().find(|p| p.id == id)
}

/// Pathway with clusters looked up. Steps naming an unknown cluster are dropped.
pub fn resolve_pathway(id: &str) -> Option<ResolvedPathway> {
    let pathway = get_pathway(id)?;
    let steps = pathway
        .steps
        .iter()
        .filter_map(|step| {
            get_cluster(step.cluster_id).map(|cluster| ResolvedPathwayStep {
                stage: step.stage,
                stage_label: step.stage.label(),
                cluster,
            })
        })
        .collect();

    Some(ResolvedPathway {
        id: pathway.id,
        title: pathway.title,
        summary: pathway.summary,
        steps,
    })
}
