//! Completed focus session log

use crate::error::Result;
use chrono::{DateTime, Utc};
use drift_core::JsonStore;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

const STORE_KEY: &str = "focus_sessions";

/// A finished (or abandoned) focus run
///
/// Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusSession {
    /// Unique session identifier
    pub id: Uuid,

    /// Label of the preset the session ran under
    pub preset_label: String,

    /// Focus time actually accumulated
    pub duration: Duration,

    /// When the session ended
    pub completed_at: DateTime<Utc>,

    /// Whether the countdown ran to zero
    pub completed: bool,
}

impl FocusSession {
    /// Record a session ending now
    pub fn new(preset_label: impl Into<String>, duration: Duration, completed: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            preset_label: preset_label.into(),
            duration,
            completed_at: Utc::now(),
            completed,
        }
    }
}

/// Append-only session history, newest first, persisted as JSON
pub struct SessionLog {
    store: JsonStore,
    sessions: Vec<FocusSession>,
}

impl SessionLog {
    /// Open the log backed by the given store, loading any saved history
    pub fn open(store: JsonStore) -> Result<Self> {
        let sessions = store.load::<Vec<FocusSession>>(STORE_KEY)?.unwrap_or_default();
        Ok(Self { store, sessions })
    }

    /// Append a session and persist
    pub fn record(&mut self, session: FocusSession) -> Result<()> {
        self.sessions.insert(0, session);
        self.store.save(STORE_KEY, &self.sessions)?;
        Ok(())
    }

    /// Sessions, newest first
    pub fn sessions(&self) -> &[FocusSession] {
        &self.sessions
    }

    /// Number of recorded sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sum of focus time across all sessions
    pub fn total_focus_time(&self) -> Duration {
        self.sessions.iter().map(|s| s.duration).sum()
    }

    /// Number of sessions that ran to completion
    pub fn completed_count(&self) -> usize {
        self.sessions.iter().filter(|s| s.completed).count()
    }

    /// Focus time accumulated today (UTC)
    pub fn todays_focus_time(&self) -> Duration {
        let today = Utc::now().date_naive();
        self.sessions
            .iter()
            .filter(|s| s.completed_at.date_naive() == today)
            .map(|s| s.duration)
            .sum()
    }

    /// Delete all history
    pub fn clear(&mut self) -> Result<()> {
        self.sessions.clear();
        self.store.remove(STORE_KEY)?;
        Ok(())
    }
}
