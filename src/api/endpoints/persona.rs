//! Persona routing endpoints.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::enums::{AskCategory, PersonaId};
use crate::persona;

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct PersonaResponse {
    pub persona: PersonaId,
    pub display_name: &'static str,
    pub role: &'static str,
    pub matched_rule: Option<&'static str>,
}

impl PersonaResponse {
    fn new(persona: PersonaId, matched_rule: Option<&'static str>) -> Self {
        Self {
            persona,
            display_name: persona.display_name(),
            role: persona.role(),
            matched_rule,
        }
    }
}

/// `POST /api/persona/suggest`: route a free-text question.
/// The question itself is not remembered, only the persona and the rule id.
pub async fn suggest(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
    Json(req): Json<SuggestRequest>,
) -> Json<PersonaResponse> {
    let route = persona::route_question(&req.question);

    ctx.record(&headers, |memory, session| {
        memory.track_persona(session, route.persona)?;
        match route.matched_rule {
            Some(rule) => memory.track_topic(session, rule),
            None => Ok(()),
        }
    });

    Json(PersonaResponse::new(route.persona, route.matched_rule))
}

/// `GET /api/persona/category/:category`: persona for an "Ask" category.
pub async fn for_category(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
    Path(category): Path<String>,
) -> Result<Json<PersonaResponse>, ApiError> {
    let category: AskCategory = category.parse()?;
    let persona = persona::persona_for_category(category);

    ctx.record(&headers, |memory, session| memory.track_persona(session, persona));

    Ok(Json(PersonaResponse::new(persona, None)))
}
