use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use log::info;
use uuid::Uuid;

use crate::error::SessionError;
use crate::presenter::SearchSession;

pub const SESSION_COOKIE: &str = "session_id";
pub const MAX_SESSIONS: usize = 1024;
pub const IDLE_MINUTES: i64 = 30;

struct SessionEntry {
    session: SearchSession,
    last_seen: DateTime<Utc>,
}

/// In-memory map from session id to that session's datasets.
///
/// Entries idle for longer than the TTL are swept whenever a session is
/// created, and the least recently seen entry is evicted once the map is full.
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
    max_sessions: usize,
    idle_ttl: Duration,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManager {
    pub fn new() -> Self {
        Self::with_limits(MAX_SESSIONS, Duration::minutes(IDLE_MINUTES))
    }

    pub fn with_limits(max_sessions: usize, idle_ttl: Duration) -> Self {
        SessionManager {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
            idle_ttl,
        }
    }

    /// Returns `id` if it names a live session, otherwise creates a fresh one.
    /// The flag is true when a new session was created.
    pub fn ensure(&self, id: Option<&str>) -> Result<(String, bool), SessionError> {
        self.ensure_at(id, Utc::now())
    }

    fn ensure_at(&self, id: Option<&str>, now: DateTime<Utc>) -> Result<(String, bool), SessionError> {
        let mut guard = self.sessions.lock().map_err(|_| SessionError::Poisoned)?;

        let cutoff = now - self.idle_ttl;
        guard.retain(|_, entry| entry.last_seen >= cutoff);

        if let Some(id) = id {
            if let Some(entry) = guard.get_mut(id) {
                entry.last_seen = now;
                return Ok((id.to_string(), false));
            }
        }

        while guard.len() >= self.max_sessions {
            let oldest = guard
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => {
                    guard.remove(&key);
                    info!("Evicted session {}", key);
                }
                None => break,
            }
        }

        let session_id = Uuid::new_v4().to_string();
        guard.insert(
            session_id.clone(),
            SessionEntry { session: SearchSession::new(), last_seen: now },
        );
        info!("Created session {} ({} active)", session_id, guard.len());
        Ok((session_id, true))
    }

    /// Copy of a live session's datasets. Unknown or expired ids yield `None`
    /// and nothing is inserted.
    pub fn get(&self, id: &str) -> Result<Option<SearchSession>, SessionError> {
        let now = Utc::now();
        let mut guard = self.sessions.lock().map_err(|_| SessionError::Poisoned)?;
        match guard.get_mut(id) {
            Some(entry) if entry.last_seen >= now - self.idle_ttl => {
                entry.last_seen = now;
                Ok(Some(entry.session.clone()))
            }
            _ => Ok(None),
        }
    }

    /// Runs `f` against the session while holding the store lock.
    pub fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut SearchSession) -> T,
    ) -> Result<T, SessionError> {
        let now = Utc::now();
        let mut guard = self.sessions.lock().map_err(|_| SessionError::Poisoned)?;
        let entry = guard.entry(id.to_string()).or_insert_with(|| SessionEntry {
            session: SearchSession::new(),
            last_seen: now,
        });
        entry.last_seen = now;
        Ok(f(&mut entry.session))
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
