//! File-backed session storage
//!
//! Persists the session as a single JSON document so the token and the
//! business profile can never drift apart: one file, saved and removed
//! as a unit.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bizhub_client::{ClientError, ClientResult, Session, SessionStore};

/// Durable session store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store at the given file path. The file is created lazily
    /// on the first `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let text = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&text) {
            Ok(session) => Some(session),
            Err(err) => {
                // A corrupt file is treated as no session; the user logs
                // in again and the next save overwrites it.
                tracing::warn!(path = %self.path.display(), error = %err, "Ignoring unreadable session file");
                None
            }
        }
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(storage_error)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json).map_err(storage_error)?;
        tracing::debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Session cleared");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error(err)),
        }
    }
}

fn storage_error(err: io::Error) -> ClientError {
    ClientError::Storage(err.to_string())
}
