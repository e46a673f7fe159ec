//! Service atlas endpoints. Read-only views over the static catalog.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::atlas::{
    self, DiscoveryOption, ResolvedPathway, ServiceAtlasCard, ServiceAtlasCluster,
};

#[derive(Debug, Serialize)]
pub struct ClusterView {
    #[serde(flatten)]
    pub cluster: &'static ServiceAtlasCluster,
    pub services: Vec<ServiceAtlasCard>,
}

impl ClusterView {
    fn new(cluster: &'static ServiceAtlasCluster) -> Self {
        Self {
            cluster,
            services: atlas::services_for_cluster(cluster.id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceView {
    #[serde(flatten)]
    pub card: ServiceAtlasCard,
    pub cluster: Option<&'static ServiceAtlasCluster>,
}

/// `GET /api/atlas/clusters`
pub async fn clusters() -> Json<Vec<ClusterView>> {
    Json(atlas::all_clusters().iter().map(ClusterView::new).collect())
}

/// `GET /api/atlas/clusters/:id`
pub async fn cluster(Path(id): Path<String>) -> Result<Json<ClusterView>, ApiError> {
    let cluster = atlas::get_cluster(&id)
        .ok_or_else(|| ApiError::NotFound(format!("No cluster '{id}'")))?;
    Ok(Json(ClusterView::new(cluster)))
}

/// `GET /api/atlas/services/:slug`: card plus the cluster it is listed under.
pub async fn service(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<Json<ServiceView>, ApiError> {
    let card = atlas::get_service_card(&slug)
        .ok_or_else(|| ApiError::NotFound(format!("No service '{slug}'")))?;

    ctx.record(&headers, |memory, session| memory.track_service(session, card.slug));

    Ok(Json(ServiceView {
        cluster: atlas::cluster_for_service_slug(card.slug),
        card,
    }))
}

/// `GET /api/atlas/discovery`
pub async fn discovery() -> Json<&'static [DiscoveryOption]> {
    Json(atlas::discovery_options())
}

/// `GET /api/atlas/pathways/:id`
pub async fn pathway(Path(id): Path<String>) -> Result<Json<ResolvedPathway>, ApiError> {
    atlas::resolve_pathway(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No pathway '{id}'")))
}
