use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::{DateTime, Utc};

use crate::error::CareError;
use crate::memory::ExperienceMemoryStore;

/// Header carrying the visitor's experience session id.
pub const SESSION_HEADER: &str = "X-Experience-Session";

// ═══════════════════════════════════════════════════════════
// ApiContext
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub memory: Arc<ExperienceMemoryStore>,
    pub started_at: DateTime<Utc>,
}

impl ApiContext {
    pub fn new(memory: Arc<ExperienceMemoryStore>) -> Self {
        Self {
            memory,
            started_at: Utc::now(),
        }
    }

    /// Record into the visitor's experience memory if the request named a
    /// session. Failures are logged, never returned.
    pub fn record(
        &self,
        headers: &HeaderMap,
        f: impl FnOnce(&ExperienceMemoryStore, &str) -> Result<(), CareError>,
    ) {
        let Some(session) = session_from_headers(headers) else {
            return;
        };
        if let Err(e) = f(&self.memory, &session) {
            tracing::warn!(error = %e, "Could not record experience memory");
        }
    }
}

impl Default for ApiContext {
    fn default() -> Self {
        Self::new(Arc::new(ExperienceMemoryStore::new()))
    }
}

/// Session id from `X-Experience-Session`, if present and non-blank.
pub fn session_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
