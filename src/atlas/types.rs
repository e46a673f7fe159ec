use serde::Serialize;

use crate::models::enums::{PathwayStage, PersonaId};

/// Raw catalog entry for one service. Persona is derived, not stored.
#[derive(Debug, Clone, Copy)]
pub struct ServiceEntry {
    pub slug: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub downtime: &'static str,
}

/// Service as presented to visitors, with its derived default persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceAtlasCard {
    pub slug: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub downtime: &'static str,
    pub default_persona: PersonaId,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceAtlasCluster {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub service_slugs: &'static [&'static str],
}

/// "I want to..." entry point into one or more clusters.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryOption {
    pub id: &'static str,
    pub prompt: &'static str,
    pub description: &'static str,
    pub cluster_ids: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PathwayStep {
    pub cluster_id: &'static str,
    pub stage: PathwayStage,
}

/// Conceptual multi-step journey across clusters.
#[derive(Debug, Clone, Serialize)]
pub struct CarePathway {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub steps: &'static [PathwayStep],
}

/// A pathway step with its cluster looked up.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPathwayStep {
    pub stage: PathwayStage,
    pub stage_label: &'static str,
    pub cluster: &'static ServiceAtlasCluster,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPathway {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub steps: Vec<ResolvedPathwayStep>,
}
