/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Durable session storage backed by a single JSON file
//!
//! The file holds a flat object of string entries:
//!
//! ```json
//! { "authToken": "T1", "user": "{\"id\":1,\"name\":\"A\"}" }
//! ```
//!
//! Writes go to a uniquely named temporary file in the same directory that is
//! then renamed over the target, so readers observe either the old pair or the
//! new pair. Several stores may share one path; the last write wins.

use crate::constants::{AUTH_TOKEN_KEY, USER_KEY};
use crate::error::AppError;
use crate::storage::interface::SessionStore;
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

type Entries = BTreeMap<String, String>;

/// Session store persisted to a JSON file on disk
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Creates a store at `path`; nothing touches the disk until the first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            AppError::Storage(format!(
                "session file {} is not a JSON object of strings: {e}",
                self.path.display()
            ))
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), AppError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&serde_json::to_vec_pretty(entries)?)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| AppError::Io(e.error))?;
        debug!("Session file written: {}", self.path.display());
        Ok(())
    }

    /// Read-modify-write under the in-process lock
    ///
    /// An unreadable file is replaced rather than reported, so a corrupt
    /// store can always be overwritten or cleared.
    fn update<F>(&self, apply: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut Entries),
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| AppError::Storage(format!("file store lock poisoned: {e}")))?;
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(AppError::Storage(reason)) => {
                warn!("Discarding unreadable session file: {}", reason);
                Entries::new()
            }
            Err(e) => return Err(e),
        };
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

impl SessionStore for FileStore {
    fn token(&self) -> Result<Option<String>, AppError> {
        Ok(self.read_entries()?.remove(AUTH_TOKEN_KEY))
    }

    fn user_raw(&self) -> Result<Option<String>, AppError> {
        Ok(self.read_entries()?.remove(USER_KEY))
    }

    fn save(&self, token: &str, user_json: &str) -> Result<(), AppError> {
        self.update(|entries| {
            entries.insert(AUTH_TOKEN_KEY.to_string(), token.to_string());
            entries.insert(USER_KEY.to_string(), user_json.to_string());
        })
    }

    fn clear(&self) -> Result<(), AppError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(AUTH_TOKEN_KEY);
            entries.remove(USER_KEY);
        })
    }
}
