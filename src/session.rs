//! Auth session lifecycle.
//!
//! Replaces ambient token storage with an explicit object the embedding
//! app threads to whatever needs it: load the persisted token on
//! startup, persist it on login/signup, clear it on logout.

use crate::constants::{CONFIG_DIR_NAME, SESSION_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted session state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// JWT bearer token, present while a user is signed in
    pub token: Option<String>,
}

impl Session {
    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Loads and persists the session under the platform config dir.
#[derive(Clone, Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store under the default platform config dir
    /// (e.g. `~/.config/chartboard/session.json` on Linux).
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join(CONFIG_DIR_NAME).join(SESSION_FILE_NAME),
        }
    }

    /// Store at an explicit path (used by tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted session, falling back to a signed-out session
    /// when the file is missing or unreadable.
    pub fn load(&self) -> Session {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed session file: {}", e);
                Session::default()
            }),
            Err(_) => Session::default(),
        }
    }

    /// Persist a token (login/signup).
    pub fn persist(&self, token: &str) -> anyhow::Result<Session> {
        let session = Session {
            token: Some(token.to_string()),
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&session)?)?;
        Ok(session)
    }

    /// Remove the persisted session (logout).
    pub fn clear(&self) -> anyhow::Result<Session> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        Ok(Session::default())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
