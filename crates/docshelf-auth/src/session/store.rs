//! In-memory session storage with idle expiry, built on moka.

use std::time::Duration;

use moka::future::Cache;
use tracing::debug;
use uuid::Uuid;

use docshelf_core::config::SessionConfig;
use docshelf_core::types::SessionData;

/// Keeps [`SessionData`] keyed by the id stored in the browser cookie.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Cache<String, SessionData>,
}

impl SessionStore {
    /// Create a store from session configuration.
    pub fn new(config: &SessionConfig) -> Self {
        let sessions = Cache::builder()
            .max_capacity(config.max_sessions)
            .time_to_idle(Duration::from_secs(config.idle_timeout_minutes * 60))
            .build();
        Self { sessions }
    }

    /// Generate a fresh, unguessable session id.
    pub fn new_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// Fetch a live session.
    pub async fn load(&self, id: &str) -> Option<SessionData> {
        self.sessions.get(id).await
    }

    /// Store a session, dropping it once it holds nothing.
    pub async fn save(&self, id: &str, data: SessionData) {
        if data.is_empty() {
            self.sessions.invalidate(id).await;
            return;
        }
        self.sessions.insert(id.to_string(), data).await;
    }

    /// Retire `old_id` and return a fresh id for its data.
    ///
    /// Used on sign-in so an id handed out before authentication never
    /// names a signed-in session.
    pub async fn rotate(&self, old_id: &str) -> String {
        self.sessions.invalidate(old_id).await;
        let id = self.new_id();
        debug!("Rotated session id");
        id
    }

    /// Approximate number of live sessions.
    pub fn len(&self) -> u64 {
        self.sessions.entry_count()
    }

    /// Whether no sessions are held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
