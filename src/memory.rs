//! Experience memory: what a visitor explored during a session.
//!
//! Holds topics, viewed services, personas used and coarse preferences so
//! the site can pick up where the visitor left off. Key properties:
//! - Lives in memory only, keyed by an opaque session id (max 64 chars)
//! - At most `max_sessions` live sessions; the least recently written is evicted
//! - Each list is newest-first, deduplicated and capped at `MEMORY_CAP`
//! - No clinical content: topics are short labels, never free-text answers
//! - Reset clears a session; ending a session drops it entirely

use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CareError;
use crate::models::enums::{DecisionStyle, DowntimeComfort, PersonaId};

/// Maximum entries kept per list.
pub const MEMORY_CAP: usize = 24;

/// Longest accepted topic label, in characters.
pub const MAX_TOPIC_CHARS: usize = 64;

// ═══════════════════════════════════════════════════════════
// ExperienceMemory: one session
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoarsePreferences {
    pub downtime_comfort: Option<DowntimeComfort>,
    pub decision_style: Option<DecisionStyle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceMemory {
    pub topics: VecDeque<String>,
    pub services: VecDeque<String>,
    pub personas: VecDeque<PersonaId>,
    pub preferences: CoarsePreferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ExperienceMemory {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            topics: VecDeque::new(),
            services: VecDeque::new(),
            personas: VecDeque::new(),
            preferences: CoarsePreferences::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
            && self.services.is_empty()
            && self.personas.is_empty()
            && self.preferences == CoarsePreferences::default()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for ExperienceMemory {
    fn default() -> Self {
        Self::new()
    }
}

/// Move `value` to the front, dropping any earlier copy and anything past the cap.
fn remember<T: PartialEq>(list: &mut VecDeque<T>, value: T) {
    list.retain(|v| *v != value);
    list.push_front(value);
    list.truncate(MEMORY_CAP);
}

fn normalize_label(raw: &str, what: &str) -> Result<String, CareError> {
    let label = raw.trim().to_lowercase();
    if label.is_empty() {
        return Err(CareError::Validation(format!("{what} must not be blank")));
    }
    if label.chars().count() > MAX_TOPIC_CHARS {
        return Err(CareError::Validation(format!(
            "{what} must be a short label (max {MAX_TOPIC_CHARS} characters)"
        )));
    }
    Ok(label)
}

// ═══════════════════════════════════════════════════════════
// ExperienceMemoryStore: all sessions
// ═══════════════════════════════════════════════════════════

/// Default bound on live sessions before the least recently written is evicted.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// Longest accepted session id, in characters.
pub const MAX_SESSION_ID_CHARS: usize = 64;

struct SessionEntry {
    memory: ExperienceMemory,
    last_write: u64,
}

#[derive(Default)]
struct SessionTable {
    entries: HashMap<String, SessionEntry>,
    clock: u64,
}

impl SessionTable {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Make room for one more session.
    fn evict_if_full(&mut self, max_sessions: usize) {
        while self.entries.len() >= max_sessions {
            let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, e)| e.last_write)
                .map(|(id, _)| id.clone())
            else {
                return;
            };
            self.entries.remove(&oldest);
            tracing::debug!(session = %oldest, "Experience session evicted");
        }
    }
}

fn validate_session_id(session_id: &str) -> Result<(), CareError> {
    if session_id.trim().is_empty() {
        return Err(CareError::Validation("session id must not be blank".into()));
    }
    if session_id.chars().count() > MAX_SESSION_ID_CHARS {
        return Err(CareError::Validation(format!(
            "session id must be at most {MAX_SESSION_ID_CHARS} characters"
        )));
    }
    Ok(())
}

/// Session-keyed experience memory, bounded to `max_sessions` live entries.
/// One writer per session in practice, but the store is shared across
/// request handlers.
pub struct ExperienceMemoryStore {
    sessions: RwLock<SessionTable>,
    max_sessions: usize,
}

impl ExperienceMemoryStore {
    pub fn new() -> Self {
        Self::with_max_sessions(DEFAULT_MAX_SESSIONS)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(SessionTable::default()),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Start a fresh, empty session and return its id.
    pub fn open_session(&self) -> Result<String, CareError> {
        let id = Uuid::new_v4().to_string();
        let mut table = self.sessions.write().map_err(|_| CareError::LockPoisoned)?;
        table.evict_if_full(self.max_sessions);
        let last_write = table.tick();
        table.entries.insert(
            id.clone(),
            SessionEntry {
                memory: ExperienceMemory::new(),
                last_write,
            },
        );
        tracing::debug!(session = %id, "Experience session opened");
        Ok(id)
    }

    /// Copy of a session's memory. Unknown sessions read as empty.
    pub fn snapshot(&self, session_id: &str) -> Result<ExperienceMemory, CareError> {
        let table = self.sessions.read().map_err(|_| CareError::LockPoisoned)?;
        Ok(table
            .entries
            .get(session_id)
            .map(|e| e.memory.clone())
            .unwrap_or_default())
    }

    pub fn session_count(&self) -> Result<usize, CareError> {
        let table = self.sessions.read().map_err(|_| CareError::LockPoisoned)?;
        Ok(table.entries.len())
    }

    pub fn track_topic(&self, session_id: &str, topic: &str) -> Result<(), CareError> {
        let topic = normalize_label(topic, "topic")?;
        self.update(session_id, |m| remember(&mut m.topics, topic))
    }

    pub fn track_service(&self, session_id: &str, slug: &str) -> Result<(), CareError> {
        let slug = normalize_label(slug, "service slug")?;
        self.update(session_id, |m| remember(&mut m.services, slug))
    }

    pub fn track_persona(&self, session_id: &str, persona: PersonaId) -> Result<(), CareError> {
        self.update(session_id, |m| remember(&mut m.personas, persona))
    }

    /// Merge preferences: fields set in `prefs` overwrite, `None` leaves as is.
    pub fn set_preferences(
        &self,
        session_id: &str,
        prefs: CoarsePreferences,
    ) -> Result<(), CareError> {
        self.update(session_id, |m| {
            if prefs.downtime_comfort.is_some() {
                m.preferences.downtime_comfort = prefs.downtime_comfort;
            }
            if prefs.decision_style.is_some() {
                m.preferences.decision_style = prefs.decision_style;
            }
        })
    }

    /// Clear everything recorded for a session, keeping the session itself.
    /// Unknown sessions are left alone. Returns whether the session existed.
    pub fn reset(&self, session_id: &str) -> Result<bool, CareError> {
        let mut table = self.sessions.write().map_err(|_| CareError::LockPoisoned)?;
        let last_write = table.tick();
        let Some(entry) = table.entries.get_mut(session_id) else {
            return Ok(false);
        };
        entry.memory = ExperienceMemory::new();
        entry.last_write = last_write;
        tracing::debug!(session = session_id, "Experience memory reset");
        Ok(true)
    }

    /// Drop a session. Returns whether it existed.
    pub fn end_session(&self, session_id: &str) -> Result<bool, CareError> {
        let mut table = self.sessions.write().map_err(|_| CareError::LockPoisoned)?;
        let existed = table.entries.remove(session_id).is_some();
        if existed {
            tracing::debug!(session = session_id, "Experience session ended");
        }
        Ok(existed)
    }

    /// Sessions are created on first write, evicting the least recently
    /// written one when the store is full.
    fn update(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut ExperienceMemory),
    ) -> Result<(), CareError> {
        validate_session_id(session_id)?;
        let mut table = self.sessions.write().map_err(|_| CareError::LockPoisoned)?;
        if !table.entries.contains_key(session_id) {
            table.evict_if_full(self.max_sessions);
        }
        let last_write = table.tick();
        let entry = table
            .entries
            .entry(session_id.to_string())
            .or_insert_with(|| SessionEntry {
                memory: ExperienceMemory::new(),
                last_write,
            });
        f(&mut entry.memory);
        entry.memory.touch();
        entry.last_write = last_write;
        Ok(())
    }
}

impl Default for ExperienceMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
