//! Persistence of the single open clock-in session.
//!
//! The file store keeps a small JSON object with one well-known key:
//!
//! ```json
//! {
//!   "clockedInData": {
//!     "clockInTime": "2024-01-15T09:00:00.000Z",
//!     "employeeName": "Deepak Dash",
//!     "employeeEmail": "deepak.dash@company.com"
//!   }
//! }
//! ```
//!
//! No key, no file, or anything unreadable under the key means Idle. Writes
//! go through a temp file + rename so a crash never leaves half a session.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::model::session::{Identity, Session};

pub const SESSION_KEY: &str = "clockedInData";

pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSession {
    clock_in_time: String,
    employee_name: String,
    employee_email: String,
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        Self {
            clock_in_time: session
                .clock_in_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            employee_name: session.identity.name.clone(),
            employee_email: session.identity.email.clone(),
        }
    }
}

impl PersistedSession {
    fn into_session(self) -> Option<Session> {
        let clock_in_at = DateTime::parse_from_rfc3339(&self.clock_in_time)
            .ok()?
            .with_timezone(&Utc);
        let identity = Identity::new(&self.employee_name, &self.employee_email).ok()?;
        Some(Session {
            identity,
            clock_in_at,
        })
    }
}

pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Reads the whole key space. Unreadable content counts as empty so a
    /// corrupt file can always be overwritten.
    fn read_entries(&self) -> Map<String, Value> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return Map::new(),
        };

        if content.trim().is_empty() {
            return Map::new();
        }

        match serde_json::from_str::<Map<String, Value>>(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Session file is not a JSON object, ignoring it");
                Map::new()
            }
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(entries)?;

        let parent_dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent_dir)?;

        let mut temp_file = NamedTempFile::new_in(&parent_dir)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let mut entries = self.read_entries();
        let raw = entries.remove(SESSION_KEY)?;

        let session = serde_json::from_value::<PersistedSession>(raw)
            .ok()
            .and_then(PersistedSession::into_session);

        if session.is_none() {
            warn!(path = %self.path.display(), "Discarding malformed persisted session");
        }
        session
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let mut entries = self.read_entries();
        entries.insert(
            SESSION_KEY.to_string(),
            serde_json::to_value(PersistedSession::from(session))?,
        );
        self.write_entries(&entries)?;
        debug!(path = %self.path.display(), "Persisted active session");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Ok(());
        }

        let mut entries = self.read_entries();
        if entries.remove(SESSION_KEY).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}
