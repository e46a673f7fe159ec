use crate::models::enums::PathwayStage;

use super::types::{CarePathway, DiscoveryOption, PathwayStep, ServiceAtlasCluster, ServiceEntry};

// ═══════════════════════════════════════════
// Services
// ═══════════════════════════════════════════

pub static SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        slug: "botox-dysport",
        name: "Botox & Dysport",
        summary: "Wrinkle relaxers that soften lines caused by repeated expressions.",
        downtime: "None to minimal",
    },
    ServiceEntry {
        slug: "lip-filler",
        name: "Lip Filler",
        summary: "Hyaluronic acid filler for lip shape, definition and hydration.",
        downtime: "1-3 days of swelling",
    },
    ServiceEntry {
        slug: "cheek-jawline-filler",
        name: "Cheek & Jawline Filler",
        summary: "Structural filler to restore midface volume and define the jawline.",
        downtime: "1-3 days of swelling",
    },
    ServiceEntry {
        slug: "under-eye-filler",
        name: "Under-Eye Filler",
        summary: "Careful tear-trough correction to soften a hollow, tired look.",
        downtime: "Up to a week of swelling or bruising",
    },
    ServiceEntry {
        slug: "sculptra",
        name: "Sculptra",
        summary: "Collagen stimulator that restores volume gradually over a series.",
        downtime: "Minimal",
    },
    ServiceEntry {
        slug: "rf-microneedling",
        name: "RF Microneedling",
        summary: "Microneedling with radiofrequency energy for texture, scars and firmness.",
        downtime: "2-4 days of redness",
    },
    ServiceEntry {
        slug: "chemical-peel",
        name: "Chemical Peels",
        summary: "Surface renewal for tone, texture and brightness.",
        downtime: "3-7 days of peeling",
    },
    ServiceEntry {
        slug: "hydrafacial",
        name: "HydraFacial",
        summary: "Cleanse, exfoliate and hydrate in one gentle session.",
        downtime: "None",
    },
    ServiceEntry {
        slug: "laser-hair-removal",
        name: "Laser Hair Removal",
        summary: "Long-term hair reduction over a series of sessions.",
        downtime: "None to mild redness",
    },
    ServiceEntry {
        slug: "iv-therapy",
        name: "IV Therapy",
        summary: "Hydration and vitamin infusions in a relaxed setting.",
        downtime: "None",
    },
    ServiceEntry {
        slug: "medical-weight-loss",
        name: "Medical Weight Loss",
        summary: "Physician-supervised programs including GLP-1 medications where appropriate.",
        downtime: "None",
    },
    ServiceEntry {
        slug: "hormone-therapy",
        name: "Hormone Therapy",
        summary: "Evaluation and support for hormone balance.",
        downtime: "None",
    },
];

// ═══════════════════════════════════════════
// Clusters
// ═══════════════════════════════════════════

/// Cluster order matters: reverse lookup returns the first cluster listing a slug.
pub static CLUSTERS: &[ServiceAtlasCluster] = &[
    ServiceAtlasCluster {
        id: "smooth-and-soften",
        title: "Smooth & Soften",
        description: "Relax expression lines for a rested, refreshed look.",
        service_slugs: &["botox-dysport"],
    },
    ServiceAtlasCluster {
        id: "volume-and-contour",
        title: "Volume & Contour",
        description: "Restore lost volume and define facial structure.",
        service_slugs: &["lip-filler", "cheek-jawline-filler", "under-eye-filler", "sculptra"],
    },
    ServiceAtlasCluster {
        id: "skin-renewal",
        title: "Skin Renewal",
        description: "Improve tone, texture and glow.",
        service_slugs: &["rf-microneedling", "chemical-peel", "hydrafacial"],
    },
    ServiceAtlasCluster {
        id: "smooth-skin",
        title: "Smooth Skin",
        description: "Hair reduction for low-maintenance smooth skin.",
        service_slugs: &["laser-hair-removal"],
    },
    ServiceAtlasCluster {
        id: "wellness",
        title: "Wellness",
        description: "Feel-good support from the inside out.",
        service_slugs: &["iv-therapy", "medical-weight-loss", "hormone-therapy"],
    },
    ServiceAtlasCluster {
        id: "prejuvenation",
        title: "Prejuvenation",
        description: "Gentle, preventive care for early-stage changes.",
        service_slugs: &["hydrafacial", "chemical-peel", "botox-dysport"],
    },
];

// ═══════════════════════════════════════════
// Discovery options
// ═══════════════════════════════════════════

pub static DISCOVERY_OPTIONS: &[DiscoveryOption] = &[
    DiscoveryOption {
        id: "look-less-tired",
        prompt: "I want to look less tired",
        description: "Hollows, dullness and a worn-out look.",
        cluster_ids: &["volume-and-contour", "skin-renewal"],
    },
    DiscoveryOption {
        id: "soften-lines",
        prompt: "I want to soften lines",
        description: "Forehead lines, frown lines and crow's feet.",
        cluster_ids: &["smooth-and-soften", "prejuvenation"],
    },
    DiscoveryOption {
        id: "better-skin",
        prompt: "I want better skin",
        description: "Texture, tone, scarring and glow.",
        cluster_ids: &["skin-renewal"],
    },
    DiscoveryOption {
        id: "feel-my-best",
        prompt: "I want to feel my best",
        description: "Energy, weight and hormone balance.",
        cluster_ids: &["wellness"],
    },
    DiscoveryOption {
        id: "not-sure",
        prompt: "I'm not sure yet",
        description: "Start with a conversation and explore from there.",
        cluster_ids: &[],
    },
];

// ═══════════════════════════════════════════
// Pathways
// ═══════════════════════════════════════════

pub static CARE_PATHWAYS: &[CarePathway] = &[
    CarePathway {
        id: "fresh-start",
        title: "Fresh Start",
        summary: "Begin with skin health, keep lines soft, support from within.",
        steps: &[
            PathwayStep { cluster_id: "skin-renewal", stage: PathwayStage::StartHere },
            PathwayStep { cluster_id: "smooth-and-soften", stage: PathwayStage::Maintain },
            PathwayStep { cluster_id: "wellness", stage: PathwayStage::Support },
        ],
    },
    CarePathway {
        id: "contour-confidence",
        title: "Contour Confidence",
        summary: "Restore structure first, then maintain balance and skin quality.",
        steps: &[
            PathwayStep { cluster_id: "volume-and-contour", stage: PathwayStage::StartHere },
            PathwayStep { cluster_id: "smooth-and-soften", stage: PathwayStage::Maintain },
            PathwayStep { cluster_id: "skin-renewal", stage: PathwayStage::Support },
        ],
    },
    CarePathway {
        id: "whole-self",
        title: "Whole Self",
        summary: "Lead with wellness, keep skin renewed, stay ahead with prevention.",
        steps: &[
            PathwayStep { cluster_id: "wellness", stage: PathwayStage::StartHere },
            PathwayStep { cluster_id: "skin-renewal", stage: PathwayStage::Maintain },
            PathwayStep { cluster_id: "prejuvenation", stage: PathwayStage::Support },
        ],
    },
];
